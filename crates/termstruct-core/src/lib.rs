//! # Termstruct Core
//!
//! Core types for the termstruct bootstrapping library.
//!
//! This crate provides the building blocks used throughout termstruct:
//!
//! - **Types**: `Date`, `BondQuote`, `QuoteSet` and `QuoteHistory`
//! - **Accrual**: Year basis used to turn accrual days into accrued coupon
//! - **Discounting**: Continuously-compounded discount factor helpers
//! - **IO**: CSV loading of multi-date quote tables
//!
//! ## Example
//!
//! ```rust
//! use termstruct_core::prelude::*;
//!
//! let date = Date::parse("2025-01-06").unwrap();
//! let quotes = QuoteSet::new(
//!     date,
//!     vec![
//!         BondQuote::new(99.5, 1.0, 0.5, 0),
//!         BondQuote::new(98.0, 1.5, 1.0, 90),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(quotes.len(), 2);
//! assert_eq!(quotes.maturities(), vec![0.5, 1.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)]

pub mod accrual;
pub mod discounting;
pub mod error;
pub mod io;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accrual::AccrualBasis;
    pub use crate::discounting::{continuous_discount_factor, continuous_zero_rate};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::io::{read_quote_history, read_quote_history_from};
    pub use crate::types::{BondQuote, Date, QuoteHistory, QuoteSet};
}

// Re-export commonly used types at crate root
pub use accrual::AccrualBasis;
pub use error::{CoreError, CoreResult};
pub use types::{BondQuote, Date, QuoteHistory, QuoteSet};
