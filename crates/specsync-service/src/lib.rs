//! Spec model cache and component generation service.
//!
//! This crate is the synchronization core between spec classes and their
//! generated components. The contract:
//!
//! - [`ComponentGenerateService::update_component_sync`] decides between
//!   reusing the cached component and regenerating, by comparing structural
//!   models. Object identity and source text never enter the comparison.
//! - An unchanged interface returns the identical `Arc` across calls; a
//!   changed interface commits and returns a distinct one.
//! - The cached model and component for a spec are committed and read as one
//!   pair. Failed updates leave the pair exactly as it was.
//!
//! Extraction and generation are injected collaborators; the service owns
//! only identity resolution, comparison, caching, locking, and notification.

mod cache;
mod collections;
mod error;
mod extractor;
mod listeners;
mod locks;
mod service;
mod stats;

pub use cache::CacheEntry;
pub use cache::SpecModelCache;
pub use error::GenerateError;
pub use extractor::SpecModelExtractor;
pub use extractor::StructuralExtractor;
pub use listeners::ListenerId;
pub use listeners::SpecUpdateListener;
pub use service::ComponentGenerateService;
pub use stats::ServiceStats;
