//! Client core: REST access, listing state, presentation helpers and the
//! route guard.

pub mod api;
pub mod auth;
pub mod controller;
pub mod display;
pub mod routes;

pub use api::{ApiError, ApiErrorKind, ApiResult, HttpWorkationApi, WorkationApi};
pub use controller::{Confirm, ListingController, ListingError, ListingFilters, ListingState};
