use osiedle_auth::{Principal, Role};

/// Principal context for a request (authenticated identity + roles).
///
/// Inserted as a request extension by the guard middleware; absent on public
/// routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal: Principal,
}

impl PrincipalContext {
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    pub fn username(&self) -> &str {
        &self.principal.username
    }

    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.principal.roles.iter()
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }
}
