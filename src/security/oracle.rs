//! Authentication/authorization oracle contract.

use std::collections::HashSet;

/// External source of the current user's authentication state.
///
/// Queried fresh on every guard evaluation; implementations may change
/// their answers over time.
pub trait AuthOracle {
    fn is_authenticated(&self) -> bool;

    /// True if the user holds at least one of `roles`.
    fn has_any_role(&self, roles: &[String]) -> bool;
}

/// Fixed session snapshot, used by the CLI and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    authenticated: bool,
    roles: HashSet<String>,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            authenticated: true,
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

impl AuthOracle for StaticSession {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn has_any_role(&self, roles: &[String]) -> bool {
        roles.iter().any(|r| self.roles.contains(r))
    }
}
