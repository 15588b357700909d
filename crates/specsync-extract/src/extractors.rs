//! Walks a class declaration and collects the model pieces.
//!
//! Collections are deduplicated by name and sorted before they land in the
//! model, so declaration order never influences model equality. Parameter
//! lists inside a single method keep their order: a method's signature is
//! order-sensitive in a way member sets are not.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use specsync_model::DelegateModel;
use specsync_model::EventModel;
use specsync_model::PropModel;
use specsync_model::SpecIdentity;
use specsync_model::SpecKind;
use specsync_model::StateModel;
use specsync_syntax::ClassDecl;

use crate::error::ModelComputationError;
use crate::vocabulary;

pub(crate) fn identity(class: &ClassDecl) -> Result<SpecIdentity, ModelComputationError> {
    class
        .qualified_name
        .as_deref()
        .map(SpecIdentity::new)
        .ok_or_else(|| ModelComputationError::MissingQualifiedName {
            class: class.name.clone(),
        })
}

pub(crate) fn spec_kind(class: &ClassDecl) -> Result<SpecKind, ModelComputationError> {
    let layout = class.has_annotation(vocabulary::LAYOUT_SPEC);
    let mount = class.has_annotation(vocabulary::MOUNT_SPEC);

    match (layout, mount) {
        (true, false) => Ok(SpecKind::Layout),
        (false, true) => Ok(SpecKind::Mount),
        (true, true) => Err(ModelComputationError::ConflictingSpecAnnotations {
            class: class.name.clone(),
            first: vocabulary::LAYOUT_SPEC.to_string(),
            second: vocabulary::MOUNT_SPEC.to_string(),
        }),
        (false, false) => Err(ModelComputationError::NotASpec {
            class: class.name.clone(),
        }),
    }
}

/// Derive the generated component's qualified name from the spec identity.
///
/// `com.example.CounterSpec` generates `com.example.Counter`. A name that is
/// nothing but the suffix (`Spec`, `com.example.Spec`) leaves no component
/// name to generate into.
pub(crate) fn component_name(identity: &SpecIdentity) -> Result<String, ModelComputationError> {
    match identity.as_str().strip_suffix("Spec") {
        Some(stem) if !stem.is_empty() && !stem.ends_with('.') => Ok(stem.to_string()),
        _ => Err(ModelComputationError::MalformedSpecName {
            class: identity.as_str().to_string(),
        }),
    }
}

pub(crate) fn props(class: &ClassDecl) -> Result<Vec<PropModel>, ModelComputationError> {
    let mut by_name: FxHashMap<String, PropModel> = FxHashMap::default();

    for method in &class.methods {
        for param in &method.params {
            let Some(annotation) = param.annotation(vocabulary::PROP) else {
                continue;
            };
            let prop = PropModel {
                name: param.name.clone(),
                ty: param.ty.clone(),
                optional: annotation.bool_arg("optional").unwrap_or(false),
            };
            match by_name.get(&prop.name) {
                Some(existing) if *existing != prop => {
                    return Err(ModelComputationError::ConflictingProp {
                        name: prop.name.clone(),
                        existing: describe_prop(existing),
                        conflicting: describe_prop(&prop),
                    });
                }
                Some(_) => {}
                None => {
                    by_name.insert(prop.name.clone(), prop);
                }
            }
        }
    }

    Ok(by_name
        .into_values()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect())
}

pub(crate) fn states(class: &ClassDecl) -> Result<Vec<StateModel>, ModelComputationError> {
    let mut by_name: FxHashMap<String, StateModel> = FxHashMap::default();

    for method in &class.methods {
        for param in &method.params {
            if !param.has_annotation(vocabulary::STATE) {
                continue;
            }
            let state = StateModel {
                name: param.name.clone(),
                ty: param.ty.clone(),
            };
            match by_name.get(&state.name) {
                Some(existing) if *existing != state => {
                    return Err(ModelComputationError::ConflictingState {
                        name: state.name,
                        existing: existing.ty.to_string(),
                        conflicting: state.ty.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    by_name.insert(state.name.clone(), state);
                }
            }
        }
    }

    Ok(by_name
        .into_values()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect())
}

pub(crate) fn events(class: &ClassDecl) -> Result<Vec<EventModel>, ModelComputationError> {
    let mut by_name: FxHashMap<String, EventModel> = FxHashMap::default();

    for method in &class.methods {
        let Some(annotation) = method.annotation(vocabulary::ON_EVENT) else {
            continue;
        };
        if by_name.contains_key(&method.name) {
            return Err(ModelComputationError::DuplicateEvent {
                name: method.name.clone(),
            });
        }
        by_name.insert(
            method.name.clone(),
            EventModel {
                name: method.name.clone(),
                event: annotation.type_arg("value").cloned(),
                params: method.params.iter().map(|param| param.ty.clone()).collect(),
            },
        );
    }

    Ok(by_name
        .into_values()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .collect())
}

pub(crate) fn delegates(
    class: &ClassDecl,
    kind: SpecKind,
) -> Result<Vec<DelegateModel>, ModelComputationError> {
    let recognized = vocabulary::delegate_annotations(kind);
    let mut collected = Vec::new();

    for method in &class.methods {
        let Some(annotation) = recognized.iter().find(|name| method.has_annotation(name)) else {
            continue;
        };
        collected.push(DelegateModel {
            annotation: (*annotation).to_string(),
            name: method.name.clone(),
            params: method.params.iter().map(|param| param.ty.clone()).collect(),
            returns: method.returns.clone(),
        });
    }

    let required = vocabulary::required_delegate(kind);
    if !collected.iter().any(|delegate| delegate.annotation == required) {
        return Err(ModelComputationError::MissingRequiredDelegate {
            kind,
            annotation: required.to_string(),
        });
    }

    Ok(collected
        .into_iter()
        .sorted_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.annotation.cmp(&b.annotation))
        })
        .collect())
}

fn describe_prop(prop: &PropModel) -> String {
    if prop.optional {
        format!("optional {}", prop.ty)
    } else {
        prop.ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use specsync_syntax::Annotation;
    use specsync_syntax::AnnotationValue;
    use specsync_syntax::MethodDecl;
    use specsync_syntax::ParamDecl;

    use super::*;

    fn layout_class() -> ClassDecl {
        ClassDecl::new("CounterSpec")
            .with_qualified_name("com.example.CounterSpec")
            .with_annotation(Annotation::marker(vocabulary::LAYOUT_SPEC))
            .with_method(
                MethodDecl::new("onCreateLayout")
                    .with_annotation(Annotation::marker("OnCreateLayout"))
                    .with_param(ParamDecl::new("c", "ComponentContext"))
                    .with_param(
                        ParamDecl::new("count", "int")
                            .with_annotation(Annotation::marker(vocabulary::PROP)),
                    )
                    .with_returns("Component"),
            )
    }

    #[test]
    fn identity_requires_qualified_name() {
        let class = ClassDecl::new("ScratchSpec");
        let err = identity(&class).unwrap_err();
        assert!(matches!(
            err,
            ModelComputationError::MissingQualifiedName { .. }
        ));
    }

    #[test]
    fn spec_kind_from_class_annotation() {
        assert_eq!(spec_kind(&layout_class()).unwrap(), SpecKind::Layout);

        let mount = ClassDecl::new("ImageSpec")
            .with_annotation(Annotation::marker(vocabulary::MOUNT_SPEC));
        assert_eq!(spec_kind(&mount).unwrap(), SpecKind::Mount);
    }

    #[test]
    fn unannotated_class_is_not_a_spec() {
        let class = ClassDecl::new("Helper").with_qualified_name("com.example.Helper");
        assert!(matches!(
            spec_kind(&class).unwrap_err(),
            ModelComputationError::NotASpec { .. }
        ));
    }

    #[test]
    fn both_spec_annotations_conflict() {
        let class = ClassDecl::new("OddSpec")
            .with_annotation(Annotation::marker(vocabulary::LAYOUT_SPEC))
            .with_annotation(Annotation::marker(vocabulary::MOUNT_SPEC));
        assert!(matches!(
            spec_kind(&class).unwrap_err(),
            ModelComputationError::ConflictingSpecAnnotations { .. }
        ));
    }

    #[test]
    fn component_name_strips_spec_suffix() {
        let name = component_name(&SpecIdentity::new("com.example.CounterSpec")).unwrap();
        assert_eq!(name, "com.example.Counter");
    }

    #[test]
    fn bare_suffix_names_are_malformed() {
        for qualified in ["Spec", "com.example.Spec", "NotASuffix"] {
            let err = component_name(&SpecIdentity::new(qualified)).unwrap_err();
            assert!(
                matches!(err, ModelComputationError::MalformedSpecName { .. }),
                "expected MalformedSpecName for {qualified}"
            );
        }
    }

    #[test]
    fn props_collected_and_sorted() {
        let class = layout_class().with_method(
            MethodDecl::new("onUpdateState")
                .with_annotation(Annotation::marker("OnUpdateState"))
                .with_param(
                    ParamDecl::new("animate", "boolean").with_annotation(
                        Annotation::marker(vocabulary::PROP)
                            .with_arg("optional", AnnotationValue::Bool(true)),
                    ),
                ),
        );

        let props = props(&class).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].name, "animate");
        assert!(props[0].optional);
        assert_eq!(props[1].name, "count");
        assert!(!props[1].optional);
    }

    #[test]
    fn repeated_prop_with_same_shape_collapses() {
        let class = layout_class().with_method(
            MethodDecl::new("onUpdateState")
                .with_annotation(Annotation::marker("OnUpdateState"))
                .with_param(
                    ParamDecl::new("count", "int")
                        .with_annotation(Annotation::marker(vocabulary::PROP)),
                ),
        );

        let props = props(&class).unwrap();
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn prop_type_conflict_is_an_error() {
        let class = layout_class().with_method(
            MethodDecl::new("onUpdateState")
                .with_annotation(Annotation::marker("OnUpdateState"))
                .with_param(
                    ParamDecl::new("count", "long")
                        .with_annotation(Annotation::marker(vocabulary::PROP)),
                ),
        );

        let err = props(&class).unwrap_err();
        assert!(matches!(err, ModelComputationError::ConflictingProp { .. }));
    }

    #[test]
    fn prop_optionality_conflict_is_an_error() {
        let class = layout_class().with_method(
            MethodDecl::new("onUpdateState")
                .with_annotation(Annotation::marker("OnUpdateState"))
                .with_param(
                    ParamDecl::new("count", "int").with_annotation(
                        Annotation::marker(vocabulary::PROP)
                            .with_arg("optional", AnnotationValue::Bool(true)),
                    ),
                ),
        );

        let err = props(&class).unwrap_err();
        let rendered = err.to_string();
        assert!(
            rendered.contains("optional int"),
            "expected optionality in message, got: {rendered}"
        );
    }

    #[test]
    fn state_type_conflict_is_an_error() {
        let class = layout_class()
            .with_method(
                MethodDecl::new("onCreateInitialState")
                    .with_annotation(Annotation::marker("OnCreateInitialState"))
                    .with_param(
                        ParamDecl::new("expanded", "boolean")
                            .with_annotation(Annotation::marker(vocabulary::STATE)),
                    ),
            )
            .with_method(
                MethodDecl::new("onUpdateState")
                    .with_annotation(Annotation::marker("OnUpdateState"))
                    .with_param(
                        ParamDecl::new("expanded", "int")
                            .with_annotation(Annotation::marker(vocabulary::STATE)),
                    ),
            );

        assert!(matches!(
            states(&class).unwrap_err(),
            ModelComputationError::ConflictingState { .. }
        ));
    }

    #[test]
    fn events_take_type_from_annotation_value() {
        let class = layout_class().with_method(
            MethodDecl::new("onReset")
                .with_annotation(
                    Annotation::marker(vocabulary::ON_EVENT)
                        .with_arg("value", AnnotationValue::Type("ClickEvent".into())),
                )
                .with_param(ParamDecl::new("c", "ComponentContext")),
        );

        let events = events(&class).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "onReset");
        assert_eq!(events[0].event.as_ref().unwrap().as_str(), "ClickEvent");
        assert_eq!(events[0].params, vec!["ComponentContext".into()]);
    }

    #[test]
    fn duplicate_event_method_is_an_error() {
        let class = layout_class()
            .with_method(
                MethodDecl::new("onReset").with_annotation(Annotation::marker(vocabulary::ON_EVENT)),
            )
            .with_method(
                MethodDecl::new("onReset").with_annotation(Annotation::marker(vocabulary::ON_EVENT)),
            );

        assert!(matches!(
            events(&class).unwrap_err(),
            ModelComputationError::DuplicateEvent { .. }
        ));
    }

    #[test]
    fn delegates_recognize_only_the_kind_vocabulary() {
        // OnMount belongs to mount specs; inside a layout spec it is
        // incidental and contributes nothing.
        let class = layout_class().with_method(
            MethodDecl::new("onMount").with_annotation(Annotation::marker("OnMount")),
        );

        let delegates = delegates(&class, SpecKind::Layout).unwrap();
        assert_eq!(delegates.len(), 1);
        assert_eq!(delegates[0].annotation, "OnCreateLayout");
    }

    #[test]
    fn missing_required_delegate_is_an_error() {
        let class = ClassDecl::new("EmptySpec")
            .with_qualified_name("com.example.EmptySpec")
            .with_annotation(Annotation::marker(vocabulary::LAYOUT_SPEC));

        let err = delegates(&class, SpecKind::Layout).unwrap_err();
        assert!(matches!(
            err,
            ModelComputationError::MissingRequiredDelegate { .. }
        ));
    }

    #[test]
    fn delegates_sorted_by_method_name() {
        let class = layout_class().with_method(
            MethodDecl::new("anUpdate")
                .with_annotation(Annotation::marker("OnUpdateState"))
                .with_param(
                    ParamDecl::new("expanded", "boolean")
                        .with_annotation(Annotation::marker(vocabulary::STATE)),
                ),
        );

        let delegates = delegates(&class, SpecKind::Layout).unwrap();
        assert_eq!(delegates.len(), 2);
        assert_eq!(delegates[0].name, "anUpdate");
        assert_eq!(delegates[1].name, "onCreateLayout");
    }
}
