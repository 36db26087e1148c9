use super::*;

#[test]
fn end_of_input_belongs_to_no_class() {
    let classes: [fn(Option<char>) -> bool; 15] = [
        is_space,
        is_octal,
        is_digit,
        is_hex_digit,
        is_ident_start,
        is_ident_continue,
        is_symbolic,
        is_escaped,
        is_hex_marker,
        is_exponent_marker,
        is_hex_exponent_marker,
        is_sign,
        is_float_suffix,
        is_int_suffix,
        is_extcode_tag,
    ];
    for class in classes {
        assert!(!class(None));
    }
}

#[test]
fn digit_classes_nest() {
    for c in ascii_members(is_octal) {
        assert!(is_digit(Some(c)), "{c:?}");
    }
    for c in ascii_members(is_digit) {
        assert!(is_hex_digit(Some(c)), "{c:?}");
    }
    assert_eq!(ascii_members(is_octal).count(), 8);
    assert_eq!(ascii_members(is_digit).count(), 10);
    assert_eq!(ascii_members(is_hex_digit).count(), 22);
}

#[test]
fn identifier_continue_extends_start() {
    assert_eq!(ascii_members(is_ident_start).count(), 53);
    for c in ascii_members(is_ident_start) {
        assert!(is_ident_continue(Some(c)));
    }
    assert!(is_ident_continue(Some('\'')));
    assert!(is_ident_continue(Some('$')));
    assert!(is_ident_continue(Some('7')));
    assert!(!is_ident_start(Some('7')));
    assert!(!is_ident_start(Some('$')));
}

#[test]
fn symbolic_excludes_brackets_and_dollar() {
    assert_eq!(ascii_members(is_symbolic).count(), 19);
    for c in ['(', ')', '[', ']', '{', '}', ',', ';', '$', '\\', '\''] {
        assert!(!is_symbolic(Some(c)), "{c:?}");
    }
}

#[test]
fn space_includes_vertical_tab_and_form_feed() {
    let spaces: String = ascii_members(is_space).collect();
    assert_eq!(spaces, "\t\n\u{0B}\u{0C}\r ");
}

#[test]
fn non_ascii_is_never_classified() {
    for c in ['é', '€', 'λ'] {
        assert!(!is_ident_start(Some(c)));
        assert!(!is_symbolic(Some(c)));
        assert!(!is_space(Some(c)));
    }
}
