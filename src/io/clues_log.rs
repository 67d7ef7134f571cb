//! # CLUES Log Scanner
//!
//! Single forward pass over a CLUES log, pulling out two things:
//! - the log-likelihood ratio: last whitespace token of any line containing
//!   `logLR` (the last such line wins)
//! - the epoch table: rows of `<label> <coefficient>` following a header
//!   line containing both `epoch` and `selection`
//!
//! A table ends at the first row that is not exactly two tokens with a
//! numeric second token. That row is consumed and not examined again; the
//! scan picks up with the line after it.
//!
//! ```text
//! logLR: 3.5
//! epoch    selection
//! 1 0.02
//! 2 0.05
//! done
//! ```

use std::io::BufRead;

use tracing::{debug, info_span};

use crate::data::{EpochTable, Metadata, SummaryRecord};
use crate::error::{Result, SummaryError};
use crate::model::wilks_pvalue;

/// Marker for the likelihood-ratio line
pub const LOG_LR_MARKER: &str = "logLR";

/// Header tokens that open an epoch table (both must be present)
pub const EPOCH_HEADER_MARKERS: [&str; 2] = ["epoch", "selection"];

/// Raw likelihood-ratio token, parsed only when used
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatioToken {
    /// 1-based line number the token came from
    pub line: usize,
    pub token: String,
}

impl RatioToken {
    /// Parse the token as a float
    pub fn value(&self) -> Result<f64> {
        parse_float(&self.token)
            .ok_or_else(|| SummaryError::non_numeric_ratio(self.line, self.token.clone()))
    }
}

/// Everything the scan collected
#[derive(Clone, Debug, Default)]
pub struct LogScan {
    /// Most recent `logLR` token, if any line carried the marker
    pub log_lr: Option<RatioToken>,
    pub epochs: EpochTable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Outer,
    Table,
}

/// Last whitespace-delimited token of a line
pub fn last_token(line: &str) -> Option<&str> {
    line.split_whitespace().next_back()
}

/// Whether a line opens an epoch table
pub fn is_epoch_header(line: &str) -> bool {
    EPOCH_HEADER_MARKERS.iter().all(|m| line.contains(m))
}

/// Parse a float literal, allowing `_` separators between digits (`0.0_1`)
pub fn parse_float(token: &str) -> Option<f64> {
    if !token.contains('_') {
        return token.parse().ok();
    }
    let bytes = token.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if !separators_ok {
        return None;
    }
    token.replace('_', "").parse().ok()
}

/// Parse one epoch-table row
///
/// Returns `None` unless the line is exactly `<label> <float>`.
pub fn parse_epoch_row(line: &str) -> Option<(String, f64)> {
    let mut tokens = line.split_whitespace();
    let label = tokens.next()?;
    let coefficient = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    let s = parse_float(coefficient)?;
    Some((label.to_string(), s))
}

/// Scan a log, collecting the ratio token and epoch table
///
/// Only I/O failures are errors; a missing marker shows up as
/// `log_lr: None`.
pub fn scan_log<R: BufRead>(reader: R) -> Result<LogScan> {
    let _span = info_span!("scan_log").entered();

    let mut scan = LogScan::default();
    let mut state = ScanState::Outer;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;

        state = match state {
            ScanState::Outer => {
                if line.contains(LOG_LR_MARKER) {
                    if let Some(token) = last_token(&line) {
                        debug!(line = line_num, token, "logLR marker");
                        scan.log_lr = Some(RatioToken {
                            line: line_num,
                            token: token.to_string(),
                        });
                    }
                    ScanState::Outer
                } else if is_epoch_header(&line) {
                    debug!(line = line_num, "epoch table start");
                    ScanState::Table
                } else {
                    ScanState::Outer
                }
            }
            ScanState::Table => match parse_epoch_row(&line) {
                Some((label, s)) => {
                    scan.epochs.insert(label, s);
                    ScanState::Table
                }
                None => {
                    debug!(line = line_num, n_epochs = scan.epochs.len(), "epoch table end");
                    ScanState::Outer
                }
            },
        };
    }

    if state == ScanState::Table {
        debug!(n_epochs = scan.epochs.len(), "log ended inside epoch table");
    }

    Ok(scan)
}

/// Scan a log and build its summary record
///
/// Fails with `MissingLikelihoodRatio` when no line carries `logLR`, and
/// with `NonNumericLikelihoodRatio` when the retained token is not a float.
pub fn extract_summary<R: BufRead>(reader: R, metadata: Metadata) -> Result<SummaryRecord> {
    let LogScan { log_lr, epochs } = scan_log(reader)?;

    let ratio = log_lr.ok_or(SummaryError::MissingLikelihoodRatio)?;
    let log_lr = ratio.value()?;
    let pval = wilks_pvalue(log_lr)?;

    debug!(log_lr, pval, n_epochs = epochs.len(), "summary assembled");

    Ok(SummaryRecord::new(metadata, log_lr, pval, epochs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn scan(text: &str) -> LogScan {
        scan_log(Cursor::new(text)).expect("scan should succeed")
    }

    fn metadata() -> Metadata {
        Metadata {
            rsid: "rs4988235".into(),
            ancestry: "ALL".into(),
            use_freq: "True".into(),
            mod_freq: "0.71".into(),
        }
    }

    #[test]
    fn test_parse_epoch_row() {
        assert_eq!(parse_epoch_row("1 0.02"), Some(("1".to_string(), 0.02)));
        assert_eq!(
            parse_epoch_row("  0-50\t-0.001  "),
            Some(("0-50".to_string(), -0.001))
        );
        assert_eq!(parse_epoch_row("done"), None);
        assert_eq!(parse_epoch_row(""), None);
        assert_eq!(parse_epoch_row("1 0.02 extra"), None);
        assert_eq!(parse_epoch_row("1 abc"), None);
    }

    #[test]
    fn test_header_detection() {
        assert!(is_epoch_header("epoch    selection"));
        assert!(is_epoch_header("#selection per epoch"));
        assert!(!is_epoch_header("epoch"));
        assert!(!is_epoch_header("Epoch Selection"));
    }

    #[test]
    fn test_last_token() {
        assert_eq!(last_token("logLR: 3.5"), Some("3.5"));
        assert_eq!(last_token("   "), None);
    }

    #[test]
    fn test_example_log() {
        let text = "logLR: 3.5\nepoch    selection\n1 0.02\n2 0.05\ndone\n";
        let record = extract_summary(Cursor::new(text), metadata()).unwrap();

        assert_eq!(record.log_lr(), 3.5);
        assert!((record.pval() - 0.008150971593502702).abs() < 1e-10);
        let epochs: Vec<(&str, f64)> = record.epochs().iter().collect();
        assert_eq!(epochs, vec![("1", 0.02), ("2", 0.05)]);
        assert_eq!(record.rsid(), "rs4988235");
        assert_eq!(record.mod_freq(), "0.71");
    }

    #[test]
    fn test_no_table_gives_empty_epochs() {
        let record = extract_summary(Cursor::new("logLR 0.0\n"), metadata()).unwrap();
        assert!(record.epochs().is_empty());
        assert_eq!(record.pval(), 1.0);
    }

    #[test]
    fn test_last_log_lr_wins_after_table() {
        let text = "logLR 1.0\n\
                    epoch selection\n\
                    1 0.1\n\
                    end of table\n\
                    logLR 2.0\n";
        let scan = scan(text);
        let ratio = scan.log_lr.unwrap();
        assert_eq!(ratio.token, "2.0");
        assert_eq!(ratio.line, 5);
        assert_eq!(scan.epochs.len(), 1);
    }

    #[test]
    fn test_terminating_line_is_not_reexamined() {
        // "logLR: 9.0" is not a two-token row, so it closes the table and is swallowed
        let text = "logLR 1.0\nepoch selection\n1 0.1\nlogLR: 9.0\nlogLR = 2.0\n";
        let resumed = scan(text);
        assert_eq!(resumed.epochs.len(), 1);
        // scanning resumes on the line after the terminator
        assert_eq!(resumed.log_lr.unwrap().token, "2.0");

        let swallowed = scan("logLR 1.0\nepoch selection\n1 0.1\nlogLR: 9.0\n");
        assert_eq!(swallowed.log_lr.unwrap().token, "1.0");
        assert_eq!(swallowed.epochs.len(), 1);
    }

    #[test]
    fn test_marker_shaped_row_inside_table_is_an_epoch() {
        let text = "logLR 1.0\nepoch selection\n1 0.1\nlogLR 9.0\n";
        let scan = scan(text);
        assert_eq!(scan.epochs.len(), 2);
        assert_eq!(scan.epochs.get("logLR"), Some(9.0));
        assert_eq!(scan.log_lr.unwrap().token, "1.0");
    }

    #[test]
    fn test_parse_float_digit_separators() {
        assert_eq!(parse_float("0.0_1"), Some(0.01));
        assert_eq!(parse_float("1_000"), Some(1000.0));
        assert_eq!(parse_float("-2.5"), Some(-2.5));
        assert_eq!(parse_float("_1"), None);
        assert_eq!(parse_float("1_"), None);
        assert_eq!(parse_float("1__0"), None);
        assert_eq!(parse_float("1._5"), None);
        assert_eq!(parse_float("abc"), None);
    }

    #[test]
    fn test_underscore_row_keeps_table_open() {
        let text = "epoch selection\n1 0.0_1\n2 0.02\nend\n";
        let scan = scan(text);
        assert_eq!(scan.epochs.len(), 2);
        assert_eq!(scan.epochs.get("1"), Some(0.01));
    }

    #[test]
    fn test_header_immediately_closed() {
        let text = "epoch selection\nnot a row here\n2 0.5\nlogLR 0.5\n";
        let scan = scan(text);
        assert!(scan.epochs.is_empty());
        assert_eq!(scan.log_lr.unwrap().token, "0.5");
    }

    #[test]
    fn test_eof_inside_table() {
        let text = "logLR 4\nepoch selection\n1 0.01\n2 0.02";
        let scan = scan(text);
        assert_eq!(scan.epochs.len(), 2);
        assert_eq!(scan.epochs.get("2"), Some(0.02));
    }

    #[test]
    fn test_second_table_extends_first() {
        let text = "epoch selection\n1 0.1\n--\nepoch selection\n2 0.2\n1 0.3\n";
        let scan = scan(text);
        let epochs: Vec<(&str, f64)> = scan.epochs.iter().collect();
        assert_eq!(epochs, vec![("1", 0.3), ("2", 0.2)]);
    }

    #[test]
    fn test_marker_checked_before_header() {
        let text = "logLR epoch selection 2.5\n1 0.1\n";
        let scan = scan(text);
        assert_eq!(scan.log_lr.unwrap().token, "2.5");
        assert!(scan.epochs.is_empty());
    }

    #[test]
    fn test_missing_marker_is_error() {
        let text = "epoch selection\n1 0.02\n";
        let err = extract_summary(Cursor::new(text), metadata()).unwrap_err();
        assert!(matches!(err, SummaryError::MissingLikelihoodRatio));
    }

    #[test]
    fn test_non_numeric_ratio_is_error() {
        let err = extract_summary(Cursor::new("x\nlogLR: n/a\n"), metadata()).unwrap_err();
        match err {
            SummaryError::NonNumericLikelihoodRatio { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_overwritten_non_numeric_ratio_is_harmless() {
        let record = extract_summary(Cursor::new("logLR ???\nlogLR 0.5\n"), metadata()).unwrap();
        assert_eq!(record.log_lr(), 0.5);
    }

    #[test]
    fn test_crlf_lines() {
        let text = "logLR: 3.5\r\nepoch selection\r\n1 0.02\r\ndone\r\n";
        let record = extract_summary(Cursor::new(text), metadata()).unwrap();
        assert_eq!(record.log_lr(), 3.5);
        assert_eq!(record.epochs().get("1"), Some(0.02));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_io_error_propagates() {
        let err = scan_log(io::BufReader::new(FailingReader)).unwrap_err();
        assert!(matches!(err, SummaryError::Io(_)));
    }
}
