use serde::Deserialize;
use serde::Serialize;

/// Stable key identifying "the same spec" across distinct in-memory
/// snapshots: the spec class's fully qualified name.
///
/// Hosts reparse files constantly; every reparse yields a new `ClassDecl`
/// value. Cache lookups and update locking key on this identity, never on
/// the snapshot itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecIdentity(String);

impl SpecIdentity {
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self(qualified_name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpecIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SpecIdentity {
    fn from(qualified_name: &str) -> Self {
        Self::new(qualified_name)
    }
}
