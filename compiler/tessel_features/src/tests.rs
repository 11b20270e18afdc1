use pretty_assertions::assert_eq;

use super::*;

#[test]
fn schemas_have_documented_widths() {
    let ws = whitespace_schema().unwrap();
    assert_eq!(ws.width(), 7);
    assert_eq!(ws.source_width(), NUM_FEATURES);
    assert_eq!(ws.mask(), &[true, true, false, true, true, false, true]);

    let align = alignment_schema().unwrap();
    assert_eq!(align.width(), 8);
    assert_eq!(align.categorical_count(), 7);
}

#[test]
fn alignment_schema_sees_first_on_line() {
    let align = alignment_schema().unwrap();
    assert!(align
        .columns()
        .iter()
        .any(|c| c.source == FIRST_ON_LINE && c.kind.is_categorical()));
    let ws = whitespace_schema().unwrap();
    assert!(ws.columns().iter().all(|c| c.source != FIRST_ON_LINE));
}
