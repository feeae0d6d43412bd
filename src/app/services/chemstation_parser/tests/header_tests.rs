//! Tests for header block parsing

use super::super::header::{HeaderEvent, HeaderState, sample_name};
use super::raw;

#[test]
fn test_sample_name_extraction() {
    assert_eq!(
        sample_name(&raw("Sample Name: S001", 1)),
        Some(Some("S001".to_string()))
    );
    assert_eq!(
        sample_name(&raw("Sample Name:WINE-7 ,,", 1)),
        Some(Some("WINE-7".to_string()))
    );
    assert_eq!(sample_name(&raw("Sample Info: S001", 1)), None);
    assert_eq!(sample_name(&raw("x,Sample Name: S001", 1)), None);
}

#[test]
fn test_sample_name_keeps_text_after_first_colon() {
    assert_eq!(
        sample_name(&raw("Sample Name: LOT:42", 1)),
        Some(Some("LOT:42".to_string()))
    );
}

#[test]
fn test_sample_name_in_next_column() {
    assert_eq!(
        sample_name(&raw("Sample Name:, ,S009", 1)),
        Some(Some("S009".to_string()))
    );
    assert_eq!(sample_name(&raw("Sample Name:,,", 1)), Some(None));
}

#[test]
fn test_blank_line_ends_header_once() {
    let mut state = HeaderState::new();
    assert!(!state.header_ended());

    assert_eq!(state.parse_line(&raw("Method: X", 1)), HeaderEvent::Ignored);
    assert_eq!(state.parse_line(&raw(",,,", 2)), HeaderEvent::HeaderEnded);
    assert!(state.header_ended());

    // Once ended, header lines are no longer examined
    assert_eq!(
        state.parse_line(&raw("Sample Name: S002", 3)),
        HeaderEvent::AlreadyEnded
    );
    assert_eq!(state.parse_line(&raw("", 4)), HeaderEvent::AlreadyEnded);
    assert!(state.header_ended());
    assert_eq!(state.active_sample(), None);
}

#[test]
fn test_sample_line_sets_active_sample() {
    let mut state = HeaderState::new();
    assert_eq!(
        state.parse_line(&raw("Sample Name: S001", 1)),
        HeaderEvent::SampleStarted("S001".to_string())
    );
    assert_eq!(state.active_sample(), Some("S001"));
    assert!(!state.header_ended());
}

#[test]
fn test_empty_sample_name_clears_active_sample() {
    let mut state = HeaderState::new();
    state.parse_line(&raw("Sample Name: S001", 1));
    assert_eq!(
        state.parse_line(&raw("Sample Name:", 2)),
        HeaderEvent::EmptySampleName
    );
    assert_eq!(state.active_sample(), None);
}

#[test]
fn test_arbitrary_preamble_is_ignored() {
    let mut state = HeaderState::new();
    for line in ["Data File: C:\\RUN.D", "Injection Date: 12/03/2024", "#,%,&"] {
        assert_eq!(state.parse_line(&raw(line, 1)), HeaderEvent::Ignored);
    }
    assert!(!state.header_ended());
    assert_eq!(state.active_sample(), None);
}
