//! appinspectd library - exposes the router for integration tests

pub mod page;
pub mod routes;
pub mod server;
