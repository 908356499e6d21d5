//! Demo endpoint handlers.

pub mod system;
