//! Spot curve bootstrap.
//!
//! The only bootstrap method is the sequential strip in [`sequential`]: each
//! bond's final cashflow is discounted at its own rate after removing the
//! present value of its earlier coupons at the rates already solved.
//!
//! # Example
//!
//! ```rust
//! use termstruct_core::{AccrualBasis, BondQuote, Date, QuoteSet};
//! use termstruct_curves::bootstrap::SpotBootstrapper;
//!
//! let quotes = QuoteSet::new(
//!     Date::from_ymd(2025, 1, 6).unwrap(),
//!     vec![BondQuote::new(99.5, 1.0, 0.5, 0), BondQuote::new(98.0, 1.5, 1.0, 90)],
//! )
//! .unwrap();
//!
//! let curve = SpotBootstrapper::new()
//!     .with_basis(AccrualBasis::Act365Fixed)
//!     .bootstrap(&quotes)
//!     .unwrap();
//! assert_eq!(curve.len(), 2);
//! ```

mod sequential;

pub use sequential::{SpotBootstrapConfig, SpotBootstrapper};
