use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Role identifier used for access decisions.
///
/// Roles are opaque names at this layer; which names exist, and which imply
/// which, is decided by the [`RoleHierarchy`](crate::RoleHierarchy) a process
/// is configured with. The two deployment variants carry different
/// vocabularies (MIESZKANIEC/ZARZAD/ADMINISTRATOR vs
/// USER/MODERATOR/ADMINISTRATOR), so roles are data rather than a compiled
/// enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Role {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}
