use super::*;

#[test]
fn dummy_is_the_empty_span_at_zero() {
    assert_eq!(Span::DUMMY, Span::new(0, 0));
    assert_eq!(Span::DUMMY.to_range(), 0..0);
}

#[test]
fn from_range_round_trips() {
    let span = Span::from_range(4..9);
    assert_eq!(span, Span::new(4, 9));
    assert_eq!(span.to_range(), 4..9);
}

#[test]
fn oversized_offsets_saturate() {
    let big = u32::MAX as usize + 10;
    assert_eq!(Span::from_range(3..big), Span::new(3, u32::MAX));
}

#[test]
fn debug_and_display_agree() {
    let span = Span::new(1, 4);
    assert_eq!(format!("{span}"), "1..4");
    assert_eq!(format!("{span:?}"), "1..4");
}
