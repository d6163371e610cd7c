pub mod app;
mod error;
mod extract;
mod pagination;
mod routes;

pub use error::{ApiError, ApiResult};
