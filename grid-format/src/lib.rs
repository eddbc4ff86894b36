//! Grid file format checks.
//!
//! A grid document starts with a header of two positive integers, the row
//! count and the column count, followed by exactly that many rows of
//! floating-point values separated by single spaces:
//!
//! ```text
//! 2 3
//! 1.0 2.0 3.0
//! 4.0 5.0 6.0
//! ```
//!
//! [`validate`] runs the checks in a fixed order and stops at the first
//! broken rule. It is pure: the same content always yields the same result.

mod reader;

use std::num::ParseFloatError;

use thiserror::Error;

use reader::TextCursor;

/// Why a document is not a well-formed grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The first token is missing or is not an integer.
    #[error("missing or invalid row count")]
    InvalidRowCount,

    /// The second token is missing or is not an integer.
    #[error("missing or invalid column count")]
    InvalidColumnCount,

    /// Something follows the column count on the header line, whitespace included.
    #[error("file should not have a third parameter")]
    ExtraHeaderParameter,

    /// A declared count is zero or negative.
    #[error("row and column counts must be positive")]
    NonPositiveDimensions {
        /// Declared row count.
        rows: i32,
        /// Declared column count.
        cols: i32,
    },

    /// A row splits into the wrong number of tokens.
    #[error("row {row} does not have {expected} columns")]
    ColumnCountMismatch {
        /// 1-based row number.
        row: usize,
        /// Declared column count.
        expected: usize,
        /// Number of tokens the row actually split into.
        found: usize,
    },

    /// A row token is not a floating-point number.
    #[error("row {row}: invalid number \"{token}\": {source}")]
    InvalidNumber {
        /// 1-based row number.
        row: usize,
        /// The raw token that failed to parse.
        token: String,
        /// Underlying parser error.
        #[source]
        source: ParseFloatError,
    },

    /// The input ended before the declared number of rows.
    #[error("expected {expected} rows but found {found}")]
    MissingRows {
        /// Declared row count.
        expected: usize,
        /// Rows actually read.
        found: usize,
    },

    /// Non-whitespace content follows the last declared row.
    #[error("extra data after expected grid")]
    TrailingData,
}

/// Grid dimensions declared by a valid header. Both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub rows: usize,
    pub cols: usize,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(GridError),
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Human-readable reason, `None` for a valid document.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(err) => Some(err.to_string()),
        }
    }
}

impl From<Result<Header, GridError>> for ValidationResult {
    fn from(result: Result<Header, GridError>) -> Self {
        match result {
            Ok(_) => Self::Valid,
            Err(err) => Self::Invalid(err),
        }
    }
}

/// Validate a whole grid document.
#[must_use]
pub fn validate(content: &str) -> ValidationResult {
    check(content).into()
}

/// Validate a grid document and return its declared dimensions.
///
/// Checks run in this order, the first failure wins:
/// 1. row count and column count tokens parse as integers
/// 2. nothing at all follows the column count on its line
/// 3. both counts are positive
/// 4. each of the next `rows` lines, trimmed and split on `' '`, has exactly
///    `cols` tokens that all parse as `f64`
/// 5. the input held at least `rows` lines
/// 6. only whitespace follows the last row
///
/// # Errors
///
/// Returns the [`GridError`] for the first rule the document breaks.
pub fn check(content: &str) -> Result<Header, GridError> {
    let mut cursor = TextCursor::new(content);

    let declared_rows = cursor
        .next_token()
        .and_then(parse_count)
        .ok_or(GridError::InvalidRowCount)?;
    let declared_cols = cursor
        .next_token()
        .and_then(parse_count)
        .ok_or(GridError::InvalidColumnCount)?;

    if !cursor.rest_of_line().is_empty() {
        return Err(GridError::ExtraHeaderParameter);
    }

    let (Some(rows), Some(cols)) = (positive(declared_rows), positive(declared_cols)) else {
        return Err(GridError::NonPositiveDimensions {
            rows: declared_rows,
            cols: declared_cols,
        });
    };

    let mut rows_read = 0;
    while rows_read < rows {
        let Some(line) = cursor.next_line() else {
            break;
        };
        check_row(line, rows_read + 1, cols)?;
        rows_read += 1;
    }

    if rows_read != rows {
        return Err(GridError::MissingRows {
            expected: rows,
            found: rows_read,
        });
    }

    if cursor.has_token() {
        return Err(GridError::TrailingData);
    }

    Ok(Header { rows, cols })
}

fn parse_count(token: &str) -> Option<i32> {
    token.parse().ok()
}

fn positive(count: i32) -> Option<usize> {
    usize::try_from(count).ok().filter(|&n| n > 0)
}

/// Rows are trimmed of characters up to and including `' '` (ASCII controls
/// and space), then split on the literal space character, so doubled spaces
/// or inner tabs change the token count.
fn check_row(line: &str, row: usize, expected: usize) -> Result<(), GridError> {
    let tokens: Vec<&str> = line.trim_matches(|c: char| c <= ' ').split(' ').collect();
    if tokens.len() != expected {
        return Err(GridError::ColumnCountMismatch {
            row,
            expected,
            found: tokens.len(),
        });
    }

    for token in tokens {
        token
            .parse::<f64>()
            .map_err(|source| GridError::InvalidNumber {
                row,
                token: token.to_owned(),
                source,
            })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(content: &str) -> String {
        validate(content)
            .reason()
            .unwrap_or_else(|| panic!("expected invalid: {content:?}"))
    }

    // ---- documented scenarios ----

    #[test]
    fn test_well_formed_grid_is_valid() {
        assert_eq!(validate("2 2\n1.0 2.0\n3.0 4.0\n"), ValidationResult::Valid);
    }

    #[test]
    fn test_zero_row_count_rejected() {
        assert_eq!(reason("0 2\n"), "row and column counts must be positive");
    }

    #[test]
    fn test_missing_row_reported_with_counts() {
        assert_eq!(reason("2 2\n1.0 2.0\n"), "expected 2 rows but found 1");
    }

    #[test]
    fn test_third_header_parameter_rejected() {
        assert_eq!(
            reason("2 2 x\n1.0 2.0\n3.0 4.0\n"),
            "file should not have a third parameter"
        );
    }

    #[test]
    fn test_non_numeric_token_rejected() {
        let result = check("1 2\nabc 2.0\n");
        assert!(
            matches!(
                &result,
                Err(GridError::InvalidNumber { row: 1, token, .. }) if token == "abc"
            ),
            "got: {result:?}"
        );
        assert!(reason("1 2\nabc 2.0\n").contains("\"abc\""));
    }

    #[test]
    fn test_extra_row_after_grid_rejected() {
        assert_eq!(
            reason("1 2\n1.0 2.0\n3.0\n"),
            "extra data after expected grid"
        );
    }

    // ---- header ----

    #[test]
    fn test_check_returns_declared_dimensions() {
        assert_eq!(
            check("2 3\n1 2 3\n4 5 6\n"),
            Ok(Header { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_empty_input_has_no_row_count() {
        assert_eq!(check(""), Err(GridError::InvalidRowCount));
        assert_eq!(check(" \n\n"), Err(GridError::InvalidRowCount));
    }

    #[test]
    fn test_non_integer_row_count() {
        assert_eq!(check("two 2\n"), Err(GridError::InvalidRowCount));
        assert_eq!(check("2.0 2\n"), Err(GridError::InvalidRowCount));
        assert_eq!(check("99999999999 1\n"), Err(GridError::InvalidRowCount));
    }

    #[test]
    fn test_missing_or_non_integer_column_count() {
        assert_eq!(check("2"), Err(GridError::InvalidColumnCount));
        assert_eq!(check("2 two\n"), Err(GridError::InvalidColumnCount));
        assert_eq!(reason("2\n"), "missing or invalid column count");
    }

    #[test]
    fn test_header_trailing_whitespace_counts_as_third_parameter() {
        // Only a zero-length remainder after the column count passes.
        assert_eq!(check("1 1 \n5\n"), Err(GridError::ExtraHeaderParameter));
        assert_eq!(check("1 1\t\n5\n"), Err(GridError::ExtraHeaderParameter));
    }

    #[test]
    fn test_header_tokens_may_span_lines() {
        // Counts are read token-wise; the tail check applies to the column count's line.
        assert_eq!(check("2\n2\n1 2\n3 4\n"), Ok(Header { rows: 2, cols: 2 }));
    }

    #[test]
    fn test_header_tail_checked_before_positivity() {
        assert_eq!(check("0 0 0\n"), Err(GridError::ExtraHeaderParameter));
    }

    #[test]
    fn test_negative_counts_rejected() {
        assert_eq!(
            check("-1 2\n"),
            Err(GridError::NonPositiveDimensions { rows: -1, cols: 2 })
        );
        assert_eq!(
            reason("3 -4\n"),
            "row and column counts must be positive"
        );
    }

    #[test]
    fn test_explicit_plus_sign_accepted() {
        assert_eq!(check("+1 +1\n7\n"), Ok(Header { rows: 1, cols: 1 }));
    }

    // ---- rows ----

    #[test]
    fn test_short_row_reports_row_and_expected_columns() {
        let result = check("3 2\n1 2\n3\n5 6\n");
        assert_eq!(
            result,
            Err(GridError::ColumnCountMismatch {
                row: 2,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(reason("3 2\n1 2\n3\n5 6\n"), "row 2 does not have 2 columns");
    }

    #[test]
    fn test_long_row_rejected() {
        assert_eq!(reason("1 2\n1 2 3\n"), "row 1 does not have 2 columns");
    }

    #[test]
    fn test_doubled_space_changes_column_count() {
        assert_eq!(reason("1 2\n1.0  2.0\n"), "row 1 does not have 2 columns");
    }

    #[test]
    fn test_tab_separated_row_is_one_token() {
        assert_eq!(reason("1 2\n1.0\t2.0\n"), "row 1 does not have 2 columns");
        assert!(matches!(
            check("1 1\n1.0\t2.0\n"),
            Err(GridError::InvalidNumber { row: 1, .. })
        ));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed_from_rows() {
        assert_eq!(validate("1 2\n   1.5 -2e3\t\n"), ValidationResult::Valid);
    }

    #[test]
    fn test_no_break_space_not_trimmed_from_rows() {
        let result = check("1 2\n1.0 2.0\u{a0}\n");
        assert!(
            matches!(&result, Err(GridError::InvalidNumber { row: 1, token, .. }) if token == "2.0\u{a0}"),
            "got: {result:?}"
        );
    }

    #[test]
    fn test_ascii_controls_trimmed_from_rows() {
        assert_eq!(validate("1 2\n\u{1}1.0 2.0\u{7}\n"), ValidationResult::Valid);
    }

    #[test]
    fn test_no_break_space_in_header_is_not_a_separator() {
        assert_eq!(check("1\u{a0}1\n5\n"), Err(GridError::InvalidRowCount));
    }

    #[test]
    fn test_no_break_space_after_grid_is_trailing_data() {
        assert_eq!(check("1 1\n5\n\u{a0}\n"), Err(GridError::TrailingData));
    }

    #[test]
    fn test_blank_line_inside_grid_is_a_row() {
        assert_eq!(reason("2 2\n\n1 2\n"), "row 1 does not have 2 columns");
        let result = check("1 1\n\n");
        assert!(
            matches!(&result, Err(GridError::InvalidNumber { row: 1, token, .. }) if token.is_empty()),
            "got: {result:?}"
        );
    }

    #[test]
    fn test_numeric_error_stops_scan() {
        // Row 2 has a bad token; row 3's column mismatch is never reached.
        let result = check("3 2\n1 2\nx 4\n5\n");
        assert!(
            matches!(&result, Err(GridError::InvalidNumber { row: 2, token, .. }) if token == "x"),
            "got: {result:?}"
        );
    }

    #[test]
    fn test_missing_rows_when_header_has_no_newline() {
        assert_eq!(
            check("2 2"),
            Err(GridError::MissingRows {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_last_row_without_newline_is_valid() {
        assert_eq!(validate("2 1\n1\n2"), ValidationResult::Valid);
    }

    #[test]
    fn test_crlf_and_cr_terminators_accepted() {
        assert_eq!(validate("2 2\r\n1 2\r\n3 4\r\n"), ValidationResult::Valid);
        assert_eq!(validate("1 1\r5\r"), ValidationResult::Valid);
    }

    #[test]
    fn test_float_syntax_accepted() {
        assert_eq!(
            validate("1 5\n1 -2.5 3e10 .5 +7.\n"),
            ValidationResult::Valid
        );
    }

    // ---- trailing data ----

    #[test]
    fn test_trailing_blank_lines_allowed() {
        assert_eq!(validate("1 1\n5\n\n  \n\t\n"), ValidationResult::Valid);
    }

    #[test]
    fn test_token_after_blank_lines_rejected() {
        assert_eq!(check("1 1\n5\n\n\n  9\n"), Err(GridError::TrailingData));
    }

    // ---- result ----

    #[test]
    fn test_validate_is_idempotent() {
        for content in ["2 2\n1 2\n3 4\n", "1 2\nabc 2.0\n", "", "1 1\n1\n2\n"] {
            assert_eq!(validate(content), validate(content));
        }
    }

    #[test]
    fn test_validation_result_accessors() {
        let valid = validate("1 1\n0\n");
        assert!(valid.is_valid());
        assert_eq!(valid.reason(), None);

        let invalid = validate("1 1\n");
        assert!(!invalid.is_valid());
        assert_eq!(
            invalid.reason().as_deref(),
            Some("expected 1 rows but found 0")
        );
    }
}
