//! Live match simulation and per-connection streaming.
//!
//! Every push-channel connection gets its own [`LiveFeed`] with its own
//! board and RNG. Nothing here is shared between connections.

pub mod feed;
pub mod simulator;
pub mod types;

pub use feed::*;
pub use simulator::*;
pub use types::*;
