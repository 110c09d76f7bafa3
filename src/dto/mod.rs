//! DTO modules that bridge the backend routes and the HTTP client.

pub mod api;
pub mod query;
