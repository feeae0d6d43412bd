//! Integration tests for the ChemStation importer public API
//!
//! These tests drive the parser and the import layer end to end with
//! export files written to disk.

use chemstation_importer::{
    ChemStationParser, Error, FileFormat, ImportConfig, ParserConfig, import_file, import_text,
};
use std::fs::File;
use std::io::{BufReader, Write};
use tempfile::NamedTempFile;

/// Two-sample ChemStation export as written by a GC sequence run
const SEQUENCE_EXPORT: &str = "\
Data File: C:\\CHEM32\\1\\DATA\\SEQ-0419\\001F0101.D
Sample Name: 2024-0419-001
Acq. Operator: J. Doe
Method: SO2.M

Comp #\tName\tRT (min)\tArea\tAmount\tUnits\tQ-value
1\tFree SO2\t1.924\t15320.5\t12.40\tmg/l\t98
2\tTotal SO2\t3.101\t40211.0\t48.10\tmg/l\t97
3\tAcetaldehyde\t4.750\tND\tND\tmg/l\t--

Sample Name: 2024-0419-002
Comp #\tName\tRT (min)\tArea\tAmount\tUnits\tQ-value
1\tFree SO2\t1.921\t14001.2\t11.02\tmg/l\t99
2\tTotal SO2\t3.120\t39876.4\t-0.01\tmg/l\t96
";

fn write_export(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

#[test]
fn test_parse_sequence_export_from_reader() {
    let temp_file = write_export(SEQUENCE_EXPORT);
    let reader = BufReader::new(File::open(temp_file.path()).unwrap());

    let result = ChemStationParser::new(ParserConfig::for_format(FileFormat::Tsv))
        .unwrap()
        .parse_reader(reader)
        .unwrap();

    assert_eq!(result.results.sample_count(), 2);
    assert_eq!(result.results.analyte_count(), 5);

    let free = result.results.analyte("2024-0419-001", "FREE_SO2").unwrap();
    assert_eq!(free.amount, Some(12.40));
    assert_eq!(free.retention_time, Some(1.924));
    assert_eq!(free.area, Some(15320.5));
    assert_eq!(free.q_value, Some(98.0));

    let total = result.results.analyte("2024-0419-002", "TOTAL_SO2").unwrap();
    assert_eq!(total.amount, Some(0.0));

    assert!(result.diagnostics.is_clean());
}

#[tokio::test]
async fn test_import_sequence_export() {
    let temp_file = write_export(SEQUENCE_EXPORT);
    let config = ImportConfig::new(FileFormat::Tsv);

    let report = import_file(Some(temp_file.path()), &config).await;

    assert!(report.is_success(), "errors: {:?}", report.errors);
    assert_eq!(
        report.log.last().unwrap(),
        "End of file reached successfully: 2 objects, 5 analyses, 5 results"
    );

    let json: serde_json::Value = serde_json::from_str(&report.to_json(true).unwrap()).unwrap();
    assert_eq!(
        json["results"]["2024-0419-001"][0]["ACETALDEHYDE"]["Amount"],
        0.0
    );
    assert_eq!(
        json["results"]["2024-0419-001"][0]["FREE_SO2"]["DefaultResult"],
        "Amount"
    );
}

#[test]
fn test_wrong_delimiter_reads_no_rows() {
    // Comma-split tab-separated rows never see a "Comp #" table header
    let report = import_text(SEQUENCE_EXPORT, &ImportConfig::new(FileFormat::Csv));

    assert!(report.errors.is_empty());
    assert!(!report.is_success());
    assert!(
        report
            .warns
            .contains(&"No analyte results were found in file".to_string())
    );
    assert_eq!(report.results.unwrap().analyte_count(), 0);
    assert_eq!(report.stats.unwrap().rows_skipped, 7);
}

#[test]
fn test_precondition_violation_is_reported_once() {
    let content = SEQUENCE_EXPORT.replacen("Sample Name: 2024-0419-001\n", "", 1);
    let report = import_text(&content, &ImportConfig::new(FileFormat::Tsv));

    assert_eq!(report.errors.len(), 1);
    assert!(report.results.is_none());

    let err = ChemStationParser::new(ParserConfig::for_format(FileFormat::Tsv))
        .unwrap()
        .parse_str(&content)
        .unwrap_err();
    assert!(matches!(err, Error::MissingSampleContext { line: 6 }));
}

#[test]
fn test_fresh_parsers_give_identical_results() {
    let parse = || {
        ChemStationParser::new(ParserConfig::for_format(FileFormat::Tsv))
            .unwrap()
            .parse_str(SEQUENCE_EXPORT)
            .unwrap()
    };

    let first = parse();
    let second = parse();
    assert_eq!(first.results, second.results);
    assert_eq!(first.diagnostics, second.diagnostics);
    assert!(first.diagnostics.is_clean());
}
