use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde::Serialize;

use crate::types::TypeRef;

/// An annotation attached to a class, method, or parameter.
///
/// Arguments are keyed by name; a bare marker annotation has no arguments.
/// Hosts map their own annotation syntax onto this shape (a single unnamed
/// argument conventionally lands under the key `value`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub args: FxHashMap<String, AnnotationValue>,
}

impl Annotation {
    /// A marker annotation with no arguments.
    #[must_use]
    pub fn marker(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: AnnotationValue) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn bool_arg(&self, key: &str) -> Option<bool> {
        match self.args.get(key) {
            Some(AnnotationValue::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn type_arg(&self, key: &str) -> Option<&TypeRef> {
        match self.args.get(key) {
            Some(AnnotationValue::Type(ty)) => Some(ty),
            _ => None,
        }
    }
}

/// A literal annotation argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Type(TypeRef),
}
