//! WebSocket endpoints registered by the demo server.

pub mod echo;
pub mod routes;
