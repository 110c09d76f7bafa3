//! Domain aggregates shared by the backend and the client.

pub mod risk;
pub mod types;
pub mod workation;
