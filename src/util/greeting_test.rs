use super::*;

#[test]
fn first_name_takes_first_word_and_capitalizes() {
    assert_eq!(first_name("jane doe"), "Jane");
    assert_eq!(first_name("John"), "John");
}

#[test]
fn first_name_trims_surrounding_whitespace() {
    assert_eq!(first_name("  maria  garcia "), "Maria");
}

#[test]
fn first_name_falls_back_when_empty() {
    assert_eq!(first_name(""), "there");
    assert_eq!(first_name("   "), "there");
}

#[test]
fn welcome_formats_full_banner() {
    assert_eq!(welcome("jane doe"), "Welcome, Jane!");
    assert_eq!(welcome(""), "Welcome, there!");
}
