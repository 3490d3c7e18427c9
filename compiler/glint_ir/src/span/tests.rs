use super::*;

#[test]
fn test_span_merge() {
    let merged = Span::new(10, 20).merge(Span::new(2, 12));
    assert_eq!(merged, Span::new(2, 20));
}

#[test]
fn test_span_to_range_slices_source() {
    let source = "x = 1";
    assert_eq!(&source[Span::new(4, 5).to_range()], "1");
}

#[test]
fn test_try_from_range_overflow() {
    let too_big = (u32::MAX as usize) + 1;
    assert_eq!(
        Span::try_from_range(0..too_big),
        Err(SpanError::EndTooLarge(too_big))
    );
}

#[test]
fn test_span_display() {
    assert_eq!(Span::new(1, 3).to_string(), "1..3");
}
