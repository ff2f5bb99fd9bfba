//! Domain types.

mod date;
mod quote;
mod quote_set;

pub use date::Date;
pub use quote::BondQuote;
pub use quote_set::{QuoteHistory, QuoteSet, LADDER_TOLERANCE};
