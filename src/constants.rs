//! Application constants for the ChemStation importer
//!
//! This module contains the vendor-format literals, fixed column positions
//! and default values used throughout the importer.

// =============================================================================
// Header Block Markers
// =============================================================================

/// Prefix of the header line carrying the sample identifier
pub const SAMPLE_NAME_PREFIX: &str = "Sample Name:";

/// First token of the results table header row
pub const TABLE_HEADER_MARKER: &str = "Comp #";

// =============================================================================
// Result Table Layout
// =============================================================================

/// Fixed column positions of the ChemStation results table
///
/// These positions are defined by the vendor export layout. The captured
/// table header row is only used to detect that the table has started,
/// never to look up these positions.
pub mod columns {
    /// Compound name, normalized into the analyte keyword
    pub const ANALYTE_NAME: usize = 1;

    /// Retention time in minutes ("RT (min)")
    pub const RETENTION_TIME: usize = 2;

    /// Integrated peak area ("Area")
    pub const AREA: usize = 3;

    /// Calculated amount, the default result ("Amount")
    pub const AMOUNT: usize = 4;

    /// Qualifier match quality ("Q-value")
    pub const Q_VALUE: usize = 6;

    /// Minimum number of tokens a result row must have
    pub const MIN_ROW_WIDTH: usize = Q_VALUE + 1;
}

/// Column labels used in diagnostics and as the default result key
pub mod column_names {
    pub const AMOUNT: &str = "Amount";
    pub const RETENTION_TIME: &str = "RT (min)";
    pub const AREA: &str = "Area";
    pub const Q_VALUE: &str = "Q-value";
}

/// Name of the field holding the primary result of an analyte record
pub const DEFAULT_RESULT_KEY: &str = column_names::AMOUNT;

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Prefix marking a cell the instrument left unquantified
pub const UNQUANTIFIED_PREFIX: &str = "--";

/// Not-detected sentinel
pub const NOT_DETECTED: &str = "ND";

// =============================================================================
// Import Defaults
// =============================================================================

/// Default delimiter when no format hint is given
pub const DEFAULT_DELIMITER: char = ',';

/// Sample workflow states accepted when importing into received samples only
pub const RECEIVED_STATES: &[&str] = &["sample_received"];

/// Sample workflow states accepted when importing into received or
/// to-be-verified samples
pub const RECEIVED_TO_BE_VERIFIED_STATES: &[&str] =
    &["sample_received", "attachment_due", "to_be_verified"];

/// Crate name used as the default tracing filter target
pub const LOG_TARGET: &str = "chemstation_importer";
