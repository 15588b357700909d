//! Host-neutral view of a parsed class declaration.
//!
//! IDE hosts own the real syntax tree. Before handing a spec class to the
//! generation core they project it onto the types in this crate: a class
//! with its annotations, fields, and methods, plus the incidental details
//! (docs, bodies, source file) that the extractor is expected to ignore.
//! The facade is serde-serializable so hosts can ship it across process
//! boundaries and tests can keep fixtures as JSON.

mod annotation;
mod class;
mod types;

pub use annotation::Annotation;
pub use annotation::AnnotationValue;
pub use class::ClassDecl;
pub use class::FieldDecl;
pub use class::MethodDecl;
pub use class::ParamDecl;
pub use types::TypeRef;
