use super::*;

#[test]
fn price_composes_surrounding_text() {
    assert_eq!(format_price("2 for ", "$5.00", " with card"), "2 for $5.00 with card");
}

#[test]
fn empty_price_text_falls_back() {
    assert_eq!(format_price("", "", ""), "Price not available");
    assert_eq!(format_price("from ", "", " each"), "Price not available");
}

#[test]
fn whitespace_only_composition_falls_back() {
    assert_eq!(format_price(" ", " ", " "), "Price not available");
}
