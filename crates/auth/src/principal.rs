use std::collections::HashSet;

use crate::{Role, RoleHierarchy};

/// The authenticated identity derived from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub roles: HashSet<Role>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            username: username.into(),
            roles: roles.into_iter().collect(),
        }
    }

    /// Whether any granted role satisfies `required` under the hierarchy.
    pub fn satisfies(&self, hierarchy: &RoleHierarchy, required: &Role) -> bool {
        self.roles.iter().any(|granted| hierarchy.implies(granted, required))
    }
}
