//! # aircheck-core
//!
//! Core types and error handling for the Aircheck radio player.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
