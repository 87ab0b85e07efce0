//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! connection / balance / transfer produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters through the `metrics` facade)
//!
//! Consumers:
//!     → stdout via tracing-subscriber (installed by the binary)
//!     → whatever recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a global subscriber or recorder itself
//! - Private keys and payload contents are never logged

pub mod logging;
pub mod metrics;
