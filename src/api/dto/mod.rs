//! Data Transfer Objects for the demo endpoints.

pub mod route_dto;
pub mod system_dto;

pub use route_dto::*;
pub use system_dto::*;
