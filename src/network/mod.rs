//! Static chain metadata for display.
//!
//! The registry is a fixed table. Unknown chains get a synthesized entry so
//! display code never fails on an unrecognised chain ID.

pub mod registry;
pub mod types;

pub use registry::lookup;
pub use types::{ChainId, NetworkInfo};
