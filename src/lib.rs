//! pl-live - demo live football score feed.
//!
//! Lists a fixed set of fixtures over HTTP and streams synthetic live
//! match updates over a WebSocket. Each connection gets its own simulated
//! board, advanced once per tick and pushed fixture by fixture.

pub mod catalog;
pub mod config;
pub mod error;
pub mod live;
pub mod server;
