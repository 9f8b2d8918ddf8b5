// src/core/mod.rs

pub mod cache;
pub mod net;
pub mod sanitize;

pub use cache::{CacheKey, CacheStats, FetchCache};
pub use net::{HttpTransport, Transport};
