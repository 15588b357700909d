//! Component class generation from structural spec models.
//!
//! The artifact here is an in-memory class surface, not rendered source
//! text: the host asks for members it can resolve references against, and
//! the real build's codegen owns everything else.

mod component;
mod error;
mod generator;

pub use component::ComponentClass;
pub use component::ComponentMember;
pub use component::MemberKind;
pub use error::GenerationError;
pub use generator::ComponentClassGenerator;
pub use generator::ComponentGenerator;
