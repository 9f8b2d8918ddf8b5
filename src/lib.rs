// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod error;
pub mod config;
pub mod core;
pub mod client;
pub mod specs;
pub mod resolve;
pub mod analyze;

pub mod csv;
pub mod data;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
