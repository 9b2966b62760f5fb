//! Script scope value object

use std::fmt;

/// Who a script belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScriptScope {
    /// Distributed identically to every identity
    Shared,
    /// Belongs to exactly one identity's namespace
    IdentityOwned(String),
}

impl ScriptScope {
    pub fn owned(identity: impl Into<String>) -> Self {
        Self::IdentityOwned(identity.into())
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared)
    }

    /// The owning identity, if any
    pub fn identity(&self) -> Option<&str> {
        match self {
            Self::Shared => None,
            Self::IdentityOwned(id) => Some(id),
        }
    }
}

impl fmt::Display for ScriptScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::IdentityOwned(id) => write!(f, "{}", id),
        }
    }
}
