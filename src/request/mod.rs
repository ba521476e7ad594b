pub mod cache;
pub mod error;
pub mod executor;
pub mod rate_limiter;
