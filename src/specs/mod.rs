// src/specs/mod.rs
//! # Endpoint “specs” module
//!
//! One file per API endpoint family (plus the raw channel page). Each spec
//! encodes *which parameters the call takes* and *where the ground truth lives
//! in the JSON*, and returns small typed structs.
//!
//! ## What lives here
//! - **Request shape**: `part`, filters, ordering and `maxResults` per call.
//! - **Tolerant decoding**: every field is optional on the wire. Counts arrive
//!   as decimal strings (`"viewCount": "1234"`) and are read through
//!   [`count`], which maps missing/null/garbage to `0`.
//! - **The HTML probe** used as the resolver's last resort (`page`).
//!
//! ## What does **not** live here
//! - **Caching** – `core::cache::FetchCache`, reached through `client::YouTube`.
//! - **Call sequencing, joins, ranking** – `analyze::*`.
//! - **Presentation** – `data`, `csv`, `gui`, `cli`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → analyze::{channel,topics} → specs::<endpoint>::*()
//!                                       ↘ client::YouTube::call → FetchCache → Transport
//! ```
pub mod channels;
pub mod page;
pub mod search;
pub mod videos;

use serde::{Deserialize, Deserializer};

/// `{"items": [...]}` envelope shared by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Lenient non-negative count: `"123"`, `123`, `null`, missing, garbage → u64 (else 0).
pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Raw {
        Int(u64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(d)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) if f.is_finite() && f >= 0.0 => f as u64,
        Some(Raw::Text(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
