//! # Application Layer
//!
//! The comparison use case: query/response contract, pipeline services,
//! and the request-level error taxonomy.

pub mod error;
pub mod query;
pub mod services;

pub use error::{CompareError, CompareResult};
pub use query::{ComparisonQuery, ComparisonQueryBuilder, ComparisonResponse};
pub use services::{ComparisonEngine, EngineConfig};
