//! Rich diagnostic error types for the worktally engine.
//!
//! Data-shape irregularities (missing dates, empty collections, unknown
//! employees) are never errors here — each aggregation recovers locally
//! and returns a well-formed, possibly-empty result. The only error
//! conditions are programming misuse, such as handing the day-bucketer
//! an inverted range, which would otherwise produce a silently wrong
//! report.

use chrono::NaiveDate;
use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the worktally engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain (error codes, help text) through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum TallyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bucket(#[from] BucketError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Series(#[from] SeriesError),
}

/// Result type used at the engine's public boundary.
pub type TallyResult<T> = std::result::Result<T, TallyError>;

// ---------------------------------------------------------------------------
// Bucket errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum BucketError {
    #[error("invalid day range: {start} through {end} (end precedes start)")]
    #[diagnostic(
        code(worktally::buckets::invalid_range),
        help(
            "The day range passed to the bucketer must satisfy start <= end. \
             Swap the endpoints or re-derive the range from the anchor date."
        )
    )]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Result type for day-bucketing operations.
pub type BucketResult<T> = std::result::Result<T, BucketError>;

// ---------------------------------------------------------------------------
// Series errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SeriesError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Bucket(#[from] BucketError),
}

/// Result type for productivity-series operations.
pub type SeriesResult<T> = std::result::Result<T, SeriesError>;
