//! # Termstruct Curves
//!
//! Term structures derived from one date's coupon bond quotes.
//!
//! This crate provides:
//!
//! - **Spot Bootstrap**: Sequential stripping of dirty prices into
//!   continuously-compounded zero rates ([`SpotBootstrapper`])
//! - **Yield Approximation**: Closed-form approximate yields
//!   ([`YieldApproximator`])
//! - **Forward Rates**: One-year-anchored forwards implied by a spot curve
//!   ([`ForwardRateDeriver`])
//! - **Repricing**: Audit of how well a bootstrapped curve reprices its quotes
//!
//! ## Quick Start
//!
//! ```rust
//! use termstruct_core::{BondQuote, Date, QuoteSet};
//! use termstruct_curves::prelude::*;
//!
//! let quotes = QuoteSet::new(
//!     Date::from_ymd(2025, 1, 6).unwrap(),
//!     vec![
//!         BondQuote::new(99.5, 1.0, 0.5, 0),
//!         BondQuote::new(98.0, 1.5, 1.0, 90),
//!     ],
//! )
//! .unwrap();
//!
//! let spot = SpotBootstrapper::new().bootstrap(&quotes).unwrap();
//! assert!((spot.rates()[0] - 0.0200002).abs() < 1e-6);
//!
//! let yields = YieldApproximator::new().approximate(&quotes).unwrap();
//! assert_eq!(yields.rates()[0], spot.rates()[0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod bootstrap;
pub mod curves;
pub mod error;
pub mod forward;
pub mod repricing;
pub mod traits;
pub mod yields;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bootstrap::{SpotBootstrapConfig, SpotBootstrapper};
    pub use crate::curves::{ForwardCurve, SpotCurve, YieldCurve};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::forward::{ForwardRateDeriver, FORWARD_START_TIMES, MIN_SPOT_POINTS};
    pub use crate::repricing::{tolerances, BootstrapResult, RepricingCheck, RepricingReport};
    pub use crate::traits::{CurveKind, RateCurve};
    pub use crate::yields::YieldApproximator;
}

pub use bootstrap::SpotBootstrapper;
pub use curves::{ForwardCurve, SpotCurve, YieldCurve};
pub use error::{CurveError, CurveResult};
pub use forward::ForwardRateDeriver;
pub use traits::{CurveKind, RateCurve};
pub use yields::YieldApproximator;
