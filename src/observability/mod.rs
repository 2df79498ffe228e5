//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (attach, compile summary, guard decisions, resolution)
//!     → logging.rs subscriber (env filter + fmt layer on stderr)
//! ```

pub mod logging;
