//! Data models for ChemStation result imports
//!
//! This module contains the structures produced by the result-file parser:
//! analyte records, the per-sample result map and the diagnostics collected
//! while parsing.

use crate::constants::{DEFAULT_RESULT_KEY, column_names, columns};
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

// =============================================================================
// Result Fields
// =============================================================================

/// Numeric fields of a results table row
///
/// Each field sits at a fixed column of the vendor layout; see
/// [`crate::constants::columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultField {
    Amount,
    RetentionTime,
    Area,
    QValue,
}

impl ResultField {
    /// All numeric fields in the order they are parsed
    pub const ALL: [ResultField; 4] = [
        ResultField::Amount,
        ResultField::RetentionTime,
        ResultField::Area,
        ResultField::QValue,
    ];

    /// Zero-based column position in a results row
    pub fn column_index(&self) -> usize {
        match self {
            ResultField::Amount => columns::AMOUNT,
            ResultField::RetentionTime => columns::RETENTION_TIME,
            ResultField::Area => columns::AREA,
            ResultField::QValue => columns::Q_VALUE,
        }
    }

    /// Column label as printed by the instrument
    pub fn column_name(&self) -> &'static str {
        match self {
            ResultField::Amount => column_names::AMOUNT,
            ResultField::RetentionTime => column_names::RETENTION_TIME,
            ResultField::Area => column_names::AREA,
            ResultField::QValue => column_names::Q_VALUE,
        }
    }
}

// =============================================================================
// Analyte Record
// =============================================================================

/// One parsed analyte row of a sample's results table
///
/// Numeric fields are never negative. A field is `None` when its cell held
/// text that is neither a number nor a not-detected sentinel; the matching
/// error is reported in [`Diagnostics::errors`].
///
/// Serialized field names follow the keys the LIMS results importer expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyteRecord {
    /// Name of the field holding the primary result
    #[serde(rename = "DefaultResult")]
    pub default_result_key: String,

    /// Calculated amount (default result)
    #[serde(rename = "Amount")]
    pub amount: Option<f64>,

    /// Retention time in minutes
    #[serde(rename = "ReturnTime")]
    pub retention_time: Option<f64>,

    /// Peak area
    #[serde(rename = "Area")]
    pub area: Option<f64>,

    /// Qualifier quality value
    #[serde(rename = "QValue")]
    pub q_value: Option<f64>,

    /// Free-text remarks, always empty for this instrument
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

impl Default for AnalyteRecord {
    fn default() -> Self {
        Self {
            default_result_key: DEFAULT_RESULT_KEY.to_string(),
            amount: None,
            retention_time: None,
            area: None,
            q_value: None,
            remarks: String::new(),
        }
    }
}

impl AnalyteRecord {
    /// Assign a coerced value to the given field
    pub fn set(&mut self, field: ResultField, value: Option<f64>) {
        match field {
            ResultField::Amount => self.amount = value,
            ResultField::RetentionTime => self.retention_time = value,
            ResultField::Area => self.area = value,
            ResultField::QValue => self.q_value = value,
        }
    }

    /// Read the value of the given field
    pub fn get(&self, field: ResultField) -> Option<f64> {
        match field {
            ResultField::Amount => self.amount,
            ResultField::RetentionTime => self.retention_time,
            ResultField::Area => self.area,
            ResultField::QValue => self.q_value,
        }
    }

    /// Value of the default result field
    pub fn default_result(&self) -> Option<f64> {
        self.amount
    }

    /// Number of numeric fields that produced a value
    pub fn value_count(&self) -> usize {
        ResultField::ALL
            .iter()
            .filter(|field| self.get(**field).is_some())
            .count()
    }
}

// =============================================================================
// Sample Results
// =============================================================================

/// Analyte records of one sample, keyed by normalized analyte keyword
///
/// The LIMS importer expects each sample to map to a one-element list of
/// keyword mappings, so this type serializes as `[ { keyword: record } ]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleResults {
    analytes: BTreeMap<String, AnalyteRecord>,
}

impl SampleResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning the record it replaced
    pub fn insert(
        &mut self,
        keyword: impl Into<String>,
        record: AnalyteRecord,
    ) -> Option<AnalyteRecord> {
        self.analytes.insert(keyword.into(), record)
    }

    pub fn get(&self, keyword: &str) -> Option<&AnalyteRecord> {
        self.analytes.get(keyword)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.analytes.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.analytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analytes.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AnalyteRecord> {
        self.analytes.iter()
    }
}

impl Serialize for SampleResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(1))?;
        seq.serialize_element(&self.analytes)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SampleResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [analytes] = <[BTreeMap<String, AnalyteRecord>; 1]>::deserialize(deserializer)?;
        Ok(Self { analytes })
    }
}

// =============================================================================
// Result Map
// =============================================================================

/// Parsed results of a whole file, keyed by sample identifier
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMap {
    samples: BTreeMap<String, SampleResults>,
}

impl ResultMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh, empty result block for a sample
    ///
    /// Returns `true` when an earlier block for the same sample was replaced.
    pub fn start_sample(&mut self, sample_id: impl Into<String>) -> bool {
        self.samples
            .insert(sample_id.into(), SampleResults::new())
            .is_some()
    }

    /// Store an analyte record under an existing sample block
    ///
    /// Returns `None` when the sample has no open block.
    pub fn insert_analyte(
        &mut self,
        sample_id: &str,
        keyword: impl Into<String>,
        record: AnalyteRecord,
    ) -> Option<Option<AnalyteRecord>> {
        self.samples
            .get_mut(sample_id)
            .map(|sample| sample.insert(keyword, record))
    }

    pub fn get(&self, sample_id: &str) -> Option<&SampleResults> {
        self.samples.get(sample_id)
    }

    /// Look up a single analyte record
    pub fn analyte(&self, sample_id: &str, keyword: &str) -> Option<&AnalyteRecord> {
        self.get(sample_id).and_then(|sample| sample.get(keyword))
    }

    pub fn contains_sample(&self, sample_id: &str) -> bool {
        self.samples.contains_key(sample_id)
    }

    pub fn sample_ids(&self) -> impl Iterator<Item = &str> {
        self.samples.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, SampleResults> {
        self.samples.iter()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Total number of analyte records across all samples
    pub fn analyte_count(&self) -> usize {
        self.samples.values().map(SampleResults::len).sum()
    }

    /// Number of analyte records carrying a default result value
    pub fn result_count(&self) -> usize {
        self.samples
            .values()
            .flat_map(|sample| sample.iter())
            .filter(|(_, record)| record.default_result().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Messages collected over a whole parse, in the order they were raised
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub logs: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn err(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn log(&mut self, message: impl Into<String>) {
        self.logs.push(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True when no errors or warnings were raised
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}
