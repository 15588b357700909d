use rustc_hash::FxHashSet;
use specsync_model::SpecModel;

use crate::component::ComponentClass;
use crate::component::ComponentMember;
use crate::component::MemberKind;
use crate::error::GenerationError;

/// Produces a component class surface from a structural spec model.
///
/// Implementations must be pure functions of the model: equal models yield
/// equal components, and generation never touches shared state. The
/// generation service relies on this when it decides that an unchanged
/// model means the previously generated artifact can keep being served.
pub trait ComponentGenerator: Send + Sync {
    fn generate(&self, model: &SpecModel) -> Result<ComponentClass, GenerationError>;
}

/// The default generator.
///
/// Emits a builder-style surface: one `create` factory, one setter per prop,
/// one handler accessor per event. State is internal to the component and
/// produces no public member.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentClassGenerator;

impl ComponentGenerator for ComponentClassGenerator {
    fn generate(&self, model: &SpecModel) -> Result<ComponentClass, GenerationError> {
        let name = simple_name(&model.component_name);
        if name.is_empty() {
            return Err(GenerationError::UnsupportedModel {
                message: format!("component name `{}` is empty", model.component_name),
            });
        }

        let mut members = Vec::with_capacity(model.props.len() + model.events.len() + 1);
        members.push(ComponentMember {
            name: "create".to_string(),
            kind: MemberKind::Factory,
        });

        for prop in &model.props {
            members.push(ComponentMember {
                name: prop.name.clone(),
                kind: MemberKind::PropSetter {
                    ty: prop.ty.clone(),
                    required: !prop.optional,
                },
            });
        }

        for event in &model.events {
            members.push(ComponentMember {
                name: event.name.clone(),
                kind: MemberKind::EventHandler {
                    event: event.event.clone(),
                },
            });
        }

        let mut seen = FxHashSet::default();
        for member in &members {
            if !seen.insert(member.name.as_str()) {
                return Err(GenerationError::MemberConflict {
                    name: member.name.clone(),
                });
            }
        }

        tracing::debug!(
            "Generated component {} with {} members",
            model.component_name,
            members.len()
        );

        Ok(ComponentClass {
            qualified_name: model.component_name.clone(),
            name: name.to_string(),
            spec: model.identity.clone(),
            kind: model.kind,
            members,
        })
    }
}

fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
