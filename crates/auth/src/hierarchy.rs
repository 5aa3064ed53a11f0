//! Role hierarchy: a static implication graph over role names.
//!
//! Holding a superior role satisfies any check for a role it implies,
//! directly or transitively. The closure is computed once at build time and
//! the hierarchy is immutable afterwards.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The configured implication edges form a cycle, which would collapse
    /// every role on the cycle into one.
    #[error("role hierarchy contains a cycle through '{0}'")]
    Cycle(String),
}

/// Builder over direct implication edges.
///
/// `implies("ZARZAD", "MIESZKANIEC")` states that anyone granted ZARZAD is
/// also treated as holding MIESZKANIEC.
#[derive(Debug, Default)]
pub struct RoleHierarchyBuilder {
    edges: Vec<(Role, Role)>,
    roles: Vec<Role>,
}

impl RoleHierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a role that takes part in no implication edge.
    pub fn role(mut self, role: impl Into<Role>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn implies(mut self, superior: impl Into<Role>, implied: impl Into<Role>) -> Self {
        self.edges.push((superior.into(), implied.into()));
        self
    }

    /// Validate acyclicity and precompute the reflexive-transitive closure.
    pub fn build(self) -> Result<RoleHierarchy, HierarchyError> {
        let mut direct: HashMap<Role, Vec<Role>> = HashMap::new();
        let mut known: HashSet<Role> = self.roles.into_iter().collect();
        for (superior, implied) in self.edges {
            known.insert(superior.clone());
            known.insert(implied.clone());
            direct.entry(superior).or_default().push(implied);
        }

        let mut reachable: HashMap<Role, HashSet<Role>> = HashMap::new();
        for role in &known {
            let mut seen = HashSet::new();
            let mut on_path = Vec::new();
            walk(role, &direct, &mut seen, &mut on_path)?;
            reachable.insert(role.clone(), seen);
        }

        Ok(RoleHierarchy { known, reachable })
    }
}

/// Depth-first reachability with cycle detection along the current path.
fn walk(
    role: &Role,
    direct: &HashMap<Role, Vec<Role>>,
    seen: &mut HashSet<Role>,
    on_path: &mut Vec<Role>,
) -> Result<(), HierarchyError> {
    if on_path.contains(role) {
        return Err(HierarchyError::Cycle(role.as_str().to_string()));
    }
    if !seen.insert(role.clone()) {
        return Ok(());
    }
    on_path.push(role.clone());
    if let Some(implied) = direct.get(role) {
        for next in implied {
            walk(next, direct, seen, on_path)?;
        }
    }
    on_path.pop();
    Ok(())
}

/// Immutable, precomputed role implication relation.
#[derive(Debug, Clone)]
pub struct RoleHierarchy {
    known: HashSet<Role>,
    reachable: HashMap<Role, HashSet<Role>>,
}

impl RoleHierarchy {
    pub fn builder() -> RoleHierarchyBuilder {
        RoleHierarchyBuilder::new()
    }

    /// Reflexive and transitive: `implies(r, r)` is always true for known
    /// roles, and implication chains compose.
    pub fn implies(&self, granted: &Role, required: &Role) -> bool {
        self.reachable
            .get(granted)
            .is_some_and(|set| set.contains(required))
    }

    /// Whether the role name is part of this hierarchy's vocabulary.
    ///
    /// The registered role set is the closed enumeration of valid roles for
    /// the process; claim names outside it are dropped during decode.
    pub fn knows(&self, role: &Role) -> bool {
        self.known.contains(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.known.iter()
    }
}
