use super::*;

#[test]
fn numeric_route_ids_parse() {
    assert_eq!(parse_list_id(Some("42".to_owned())), Ok(42));
    assert_eq!(parse_list_id(Some(" 7 ".to_owned())), Ok(7));
}

#[test]
fn missing_route_id_is_reported() {
    assert_eq!(parse_list_id(None), Err("No shop list ID provided"));
    assert_eq!(parse_list_id(Some(String::new())), Err("No shop list ID provided"));
}

#[test]
fn malformed_route_id_is_reported() {
    assert_eq!(parse_list_id(Some("abc".to_owned())), Err("No shop list ID provided"));
}
