//! The annotation names the extractor recognizes.
//!
//! Anything outside this vocabulary is incidental: an unknown annotation on
//! a class, method, or parameter never reaches the extracted model.

use specsync_model::SpecKind;

/// Marks a class as a layout spec.
pub const LAYOUT_SPEC: &str = "LayoutSpec";
/// Marks a class as a mount spec.
pub const MOUNT_SPEC: &str = "MountSpec";
/// Marks a method parameter as a component prop.
pub const PROP: &str = "Prop";
/// Marks a method parameter as component state.
pub const STATE: &str = "State";
/// Marks a method as an event handler.
pub const ON_EVENT: &str = "OnEvent";

const LAYOUT_DELEGATES: &[&str] = &["OnCreateLayout", "OnCreateInitialState", "OnUpdateState"];
const MOUNT_DELEGATES: &[&str] = &[
    "OnCreateMountContent",
    "OnMount",
    "OnUnmount",
    "OnCreateInitialState",
    "OnUpdateState",
];

/// The lifecycle annotations recognized as delegate methods for a spec kind.
#[must_use]
pub fn delegate_annotations(kind: SpecKind) -> &'static [&'static str] {
    match kind {
        SpecKind::Layout => LAYOUT_DELEGATES,
        SpecKind::Mount => MOUNT_DELEGATES,
    }
}

/// The one delegate every spec of the given kind must declare.
#[must_use]
pub fn required_delegate(kind: SpecKind) -> &'static str {
    match kind {
        SpecKind::Layout => "OnCreateLayout",
        SpecKind::Mount => "OnCreateMountContent",
    }
}
