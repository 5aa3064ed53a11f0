//! Static route table: path prefix → required access level.

use osiedle_auth::Role;

/// Access requirement for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    /// No authentication at all (login, status).
    Public,
    /// Any authenticated principal, no particular role.
    Authenticated,
    /// At least one granted role must imply this one.
    Role(Role),
}

/// Ordered prefix rules, resolved by longest matching prefix.
///
/// A rule for `/zarzad` matches `/zarzad` itself and anything under
/// `/zarzad/`. Authenticated paths with no matching rule fall back to
/// [`RouteAccess::Authenticated`].
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    rules: Vec<(String, RouteAccess)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn public(self, prefix: impl Into<String>) -> Self {
        self.rule(prefix, RouteAccess::Public)
    }

    pub fn require(self, prefix: impl Into<String>, role: impl Into<Role>) -> Self {
        self.rule(prefix, RouteAccess::Role(role.into()))
    }

    fn rule(mut self, prefix: impl Into<String>, access: RouteAccess) -> Self {
        self.rules.push((prefix.into(), access));
        self
    }

    pub fn access_for(&self, path: &str) -> RouteAccess {
        self.rules
            .iter()
            .filter(|(prefix, _)| matches_prefix(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, access)| access.clone())
            .unwrap_or(RouteAccess::Authenticated)
    }
}

fn matches_prefix(prefix: &str, path: &str) -> bool {
    path == prefix || (path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/'))
}
