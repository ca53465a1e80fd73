//! Route handlers module.

pub mod fixtures;
pub mod health;
