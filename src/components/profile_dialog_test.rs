use super::*;

#[test]
fn valid_postal_codes_pass() {
    assert!(is_valid_postal_code("A1B2C3"));
    assert!(is_valid_postal_code("Z9Z9Z9"));
}

#[test]
fn postal_code_length_must_be_six() {
    assert!(!is_valid_postal_code(""));
    assert!(!is_valid_postal_code("A1B2C"));
    assert!(!is_valid_postal_code("A1B2C3D"));
}

#[test]
fn postal_code_positions_are_checked() {
    // Digit where a letter belongs.
    assert!(!is_valid_postal_code("11B2C3"));
    // Letter where a digit belongs.
    assert!(!is_valid_postal_code("AAB2C3"));
    // Lowercase letters are rejected.
    assert!(!is_valid_postal_code("a1b2c3"));
}

#[test]
fn profile_input_requires_nickname() {
    assert_eq!(validate_profile_input("  ", "A1B2C3"), Err("Please enter a nickname"));
}

#[test]
fn profile_input_requires_valid_postal_code() {
    assert!(validate_profile_input("alice", "123456").is_err());
    assert_eq!(validate_profile_input("alice", "A1B2C3"), Ok(()));
}
