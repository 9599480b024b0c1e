//! Document-type constants, validation, and the duplicate-window rule.
//!
//! Pure domain logic — no database access. The actual lookup lives in
//! `vca-db`; this module owns what counts as a valid request and when a
//! previously generated document counts as a duplicate.

use chrono::Duration;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Document type constants
// ---------------------------------------------------------------------------

pub const DOC_TYPE_CONTRACT: &str = "contract";
pub const DOC_TYPE_SIMULATION_SUMMARY: &str = "simulation_summary";
pub const DOC_TYPE_INSPECTION_REPORT: &str = "inspection_report";
pub const VALID_DOCUMENT_TYPES: &[&str] = &[
    DOC_TYPE_CONTRACT,
    DOC_TYPE_SIMULATION_SUMMARY,
    DOC_TYPE_INSPECTION_REPORT,
];

// ---------------------------------------------------------------------------
// Duplicate window constants
// ---------------------------------------------------------------------------

/// Default window within which an identical document counts as a duplicate.
pub const DEFAULT_DUPLICATE_WINDOW_HOURS: i64 = 24;
pub const MIN_DUPLICATE_WINDOW_HOURS: i64 = 1;
pub const MAX_DUPLICATE_WINDOW_HOURS: i64 = 24 * 30;

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that `dt` is one of the allowed document types.
pub fn validate_document_type(dt: &str) -> Result<(), CoreError> {
    if VALID_DOCUMENT_TYPES.contains(&dt) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid document type '{dt}'. Must be one of: {}",
            VALID_DOCUMENT_TYPES.join(", ")
        )))
    }
}

/// Validate that a configured duplicate window is within the accepted range.
pub fn validate_window_hours(hours: i64) -> Result<(), CoreError> {
    if (MIN_DUPLICATE_WINDOW_HOURS..=MAX_DUPLICATE_WINDOW_HOURS).contains(&hours) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Duplicate window must be between {MIN_DUPLICATE_WINDOW_HOURS} and \
             {MAX_DUPLICATE_WINDOW_HOURS} hours, got {hours}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Duplicate window rule
// ---------------------------------------------------------------------------

/// Earliest `created_at` that still counts as a duplicate of a document
/// generated at `now`.
pub fn duplicate_cutoff(now: Timestamp, window_hours: i64) -> Timestamp {
    now - Duration::hours(window_hours)
}

/// Whether a document created at `created_at` falls inside the duplicate
/// window ending at `now`.
pub fn is_within_window(created_at: Timestamp, now: Timestamp, window_hours: i64) -> bool {
    created_at >= duplicate_cutoff(now, window_hours)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // -- validate_document_type ---------------------------------------------

    #[test]
    fn accepts_known_types() {
        for dt in VALID_DOCUMENT_TYPES {
            assert!(validate_document_type(dt).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(validate_document_type("invoice").is_err());
    }

    #[test]
    fn rejects_empty_type() {
        assert!(validate_document_type("").is_err());
    }

    // -- validate_window_hours ----------------------------------------------

    #[test]
    fn accepts_default_window() {
        assert!(validate_window_hours(DEFAULT_DUPLICATE_WINDOW_HOURS).is_ok());
    }

    #[test]
    fn rejects_zero_window() {
        assert!(validate_window_hours(0).is_err());
    }

    #[test]
    fn rejects_window_above_max() {
        assert!(validate_window_hours(MAX_DUPLICATE_WINDOW_HOURS + 1).is_err());
    }

    // -- duplicate window rule ----------------------------------------------

    #[test]
    fn document_inside_window_is_duplicate() {
        let now = Utc::now();
        let created = now - Duration::hours(2);
        assert!(is_within_window(created, now, 24));
    }

    #[test]
    fn document_outside_window_is_not_duplicate() {
        let now = Utc::now();
        let created = now - Duration::hours(25);
        assert!(!is_within_window(created, now, 24));
    }

    #[test]
    fn window_boundary_counts_as_duplicate() {
        let now = Utc::now();
        let created = duplicate_cutoff(now, 24);
        assert!(is_within_window(created, now, 24));
    }
}
