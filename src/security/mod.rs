//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation to a protected route:
//!     → oracle.rs (external authentication/role state)
//!     → access_guard.rs (redirect to login, redirect unauthorized, or allow)
//!     → Render protected subtree
//! ```
//!
//! # Design Decisions
//! - The authentication decision itself is external
//! - Fail closed: unauthenticated users never see protected content

pub mod access_guard;
pub mod oracle;

pub use access_guard::{AccessGuard, GuardDecision, GuardState, GuardedContent};
pub use oracle::{AuthOracle, StaticSession};
