//! CSV loading of multi-date quote tables.
//!
//! Expected header:
//!
//! ```text
//! date,maturity,coupon_rate,clean_price,accrual_days
//! 2025-01-06,0.5,2.5,98.8191,127
//! 2025-01-06,1.0,2.75,98.5851,127
//! ```
//!
//! Rows are grouped by date. Within a date the rows must already be in
//! ascending maturity order, and dates must ascend across the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::types::{BondQuote, Date, QuoteHistory, QuoteSet};

/// CSV record for a bond quote.
#[derive(Debug, Deserialize)]
struct QuoteRecord {
    date: String,
    maturity: f64,
    coupon_rate: f64,
    clean_price: f64,
    accrual_days: u32,
}

/// Reads a quote history from a CSV file.
pub fn read_quote_history(path: impl AsRef<Path>) -> CoreResult<QuoteHistory> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| CoreError::Io {
        reason: format!("{}: {e}", path.display()),
    })?;
    log::debug!("loading quotes from {}", path.display());
    read_quote_history_from(file)
}

/// Reads a quote history from any CSV source.
pub fn read_quote_history_from<R: Read>(source: R) -> CoreResult<QuoteHistory> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut groups: Vec<(Date, Vec<BondQuote>)> = Vec::new();

    for (row, result) in reader.deserialize::<QuoteRecord>().enumerate() {
        // header is line 1
        let line = row as u64 + 2;
        let record = result.map_err(|e| CoreError::parse(line, e.to_string()))?;
        let date = Date::parse(&record.date).map_err(|e| CoreError::parse(line, e.to_string()))?;
        let quote = BondQuote::new(
            record.clean_price,
            record.coupon_rate,
            record.maturity,
            record.accrual_days,
        );

        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, quotes)) => quotes.push(quote),
            None => groups.push((date, vec![quote])),
        }
    }

    let sets = groups
        .into_iter()
        .map(|(date, quotes)| QuoteSet::new(date, quotes))
        .collect::<CoreResult<Vec<_>>>()?;

    QuoteHistory::new(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
date,maturity,coupon_rate,clean_price,accrual_days
2025-01-06,0.5,2.5,98.8191,127
2025-01-06,1.0,2.75,98.5851,127
2025-01-07,0.5,2.5,98.7849,128
2025-01-07,1.0,2.75,98.4959,128
";

    #[test]
    fn test_reads_grouped_history() {
        let history = read_quote_history_from(SAMPLE.as_bytes()).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.ladder(), vec![0.5, 1.0]);
        assert_eq!(history.sets()[1].quotes()[1].accrual_days, 128);
        assert_eq!(history.dates()[0].to_string(), "2025-01-06");
    }

    #[test]
    fn test_reports_line_of_bad_row() {
        let bad = "\
date,maturity,coupon_rate,clean_price,accrual_days
2025-01-06,0.5,2.5,98.8191,127
2025-01-06,abc,2.75,98.5851,127
";
        let err = read_quote_history_from(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_reports_bad_date() {
        let bad = "\
date,maturity,coupon_rate,clean_price,accrual_days
2025-02-30,0.5,2.5,98.8191,127
";
        let err = read_quote_history_from(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_empty_file() {
        let empty = "date,maturity,coupon_rate,clean_price,accrual_days\n";
        assert!(matches!(
            read_quote_history_from(empty.as_bytes()),
            Err(CoreError::EmptyInput { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = read_quote_history("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, CoreError::Io { .. }));
    }
}
