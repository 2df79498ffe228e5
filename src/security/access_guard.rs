//! Access guard for protected subtrees.
//!
//! # States
//! - Unauthenticated: redirect to login, carrying the requested path
//! - Unauthorized: authenticated but holds none of the required roles
//! - Authorized: guarded content renders
//!
//! # State Transitions
//! ```text
//! Unauthenticated → (login) → Unauthorized | Authorized
//! ```
//!
//! # Design Decisions
//! - No state cached: every evaluation asks the oracle again
//! - Denial is a redirect decision, not an error
//! - Empty required roles means any authenticated user passes

use tracing::debug;

use crate::compiler::render::RenderNode;
use crate::config::schema::GuardConfig;
use crate::security::oracle::AuthOracle;

/// Guard state derived from the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unauthenticated,
    Unauthorized,
    Authorized,
}

/// What the guard renders when access is granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardedContent {
    /// Explicitly supplied subtree.
    Children(Vec<RenderNode>),
    /// Pure wrapper: a containment point for further nested routes.
    Outlet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    RedirectToLogin {
        to: String,
        /// Originally requested path, to resume after login.
        return_to: String,
    },
    RedirectUnauthorized {
        to: String,
    },
    Allow(GuardedContent),
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow(_))
    }

    /// Redirect target, if this decision is a redirect.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::RedirectToLogin { to, .. } | GuardDecision::RedirectUnauthorized { to } => {
                Some(to.as_str())
            }
            GuardDecision::Allow(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGuard {
    login_path: String,
    unauthorized_path: String,
    required_roles: Vec<String>,
}

impl AccessGuard {
    pub fn new(config: &GuardConfig) -> Self {
        Self {
            login_path: config.login_path.clone(),
            unauthorized_path: config.unauthorized_path.clone(),
            required_roles: config.required_roles.clone(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn unauthorized_path(&self) -> &str {
        &self.unauthorized_path
    }

    pub fn required_roles(&self) -> &[String] {
        &self.required_roles
    }

    /// Same locations, requiring `roles` instead of the current set.
    pub fn with_roles<I, S>(&self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            login_path: self.login_path.clone(),
            unauthorized_path: self.unauthorized_path.clone(),
            required_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn state(&self, oracle: &dyn AuthOracle) -> GuardState {
        if !oracle.is_authenticated() {
            GuardState::Unauthenticated
        } else if !self.required_roles.is_empty() && !oracle.has_any_role(&self.required_roles) {
            GuardState::Unauthorized
        } else {
            GuardState::Authorized
        }
    }

    /// Decide what to render for `requested_path`.
    ///
    /// `children` is the guarded subtree; `None` makes the guard a pure
    /// wrapper that renders an outlet.
    pub fn evaluate(
        &self,
        oracle: &dyn AuthOracle,
        requested_path: &str,
        children: Option<Vec<RenderNode>>,
    ) -> GuardDecision {
        let state = self.state(oracle);
        debug!(requested_path, ?state, "Access guard evaluated");

        match state {
            GuardState::Unauthenticated => GuardDecision::RedirectToLogin {
                to: self.login_path.clone(),
                return_to: requested_path.to_string(),
            },
            GuardState::Unauthorized => GuardDecision::RedirectUnauthorized {
                to: self.unauthorized_path.clone(),
            },
            GuardState::Authorized => GuardDecision::Allow(match children {
                Some(children) => GuardedContent::Children(children),
                None => GuardedContent::Outlet,
            }),
        }
    }
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(&GuardConfig::default())
    }
}
