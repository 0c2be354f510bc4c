// Edge case tests
use packed_word::{LinePointer, Timestamp, WordError};

#[test]
fn test_parser_rejects_wrong_lengths() {
    let err = Timestamp::from_binary_str("000000000000100001000000000000011").unwrap_err();
    assert_eq!(
        err,
        WordError::MalformedInput("input must be 32 characters, got 33".to_string()),
    );

    assert!(Timestamp::from_binary_str("").is_err());
    assert!(Timestamp::from_binary_str(&"0".repeat(31)).is_err());
}

#[test]
fn test_parser_rejects_non_binary_characters() {
    let mut s = "0".repeat(31);
    s.push('2');
    assert!(Timestamp::from_binary_str(&s).is_err());

    let mut s = "1".repeat(31);
    s.push('x');
    assert!(Timestamp::from_binary_str(&s).is_err());
}

#[test]
fn test_parser_accepts_extremes() {
    let ts = Timestamp::from_binary_str(&"0".repeat(32)).unwrap();
    assert_eq!(ts.as_u32(), 0);

    let ts = Timestamp::from_binary_str(&"1".repeat(32)).unwrap();
    assert_eq!(ts.as_u32(), u32::MAX);
}

#[test]
fn test_single_max_field_leaves_others_zero() {
    let lp = LinePointer::new(32767, 0, 0).unwrap();
    assert_eq!((lp.state(), lp.length()), (0, 0));

    let lp = LinePointer::new(0, 3, 0).unwrap();
    assert_eq!((lp.offset(), lp.length()), (0, 0));

    let lp = LinePointer::new(0, 0, 32767).unwrap();
    assert_eq!((lp.offset(), lp.state()), (0, 0));

    let ts = Timestamp::from_calendar(1900, 0, 0, 0, 63, 0);
    let fields = ts.fields();
    assert_eq!(fields.minute, 63);
    assert_eq!(
        (fields.year, fields.month, fields.day, fields.hour, fields.weekday),
        (0, 0, 0, 0, 0),
    );
}

#[test]
fn test_out_of_range_calendar_input_truncates() {
    // the timestamp path does not validate; values wrap within their
    // own field and never disturb neighbors
    let ts = Timestamp::from_calendar(2156, 1, 1, 0, 0, 1);
    assert_eq!(ts.fields().year, 0);
    assert_eq!(ts.fields().month, 1);
    assert_eq!(ts.as_u32() >> 31, 0);
}

#[test]
fn test_error_display_formats() {
    let err = LinePointer::new(32768, 0, 0).unwrap_err();
    assert_eq!(err.to_string(), "FieldOverflow: offset must be <= 32767");

    let err = Timestamp::from_binary_str("01").unwrap_err();
    assert_eq!(
        err.to_string(),
        "MalformedInput: input must be 32 characters, got 2",
    );
}
