//! HTTP surface: router, handlers, and error mapping

pub mod routes;

pub use routes::{build_router, AppError};
