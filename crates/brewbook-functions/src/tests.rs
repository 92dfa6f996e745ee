use super::*;
use proptest::prelude::*;
use test_case::test_case;

// ============================================================================
// make_tea
// ============================================================================

#[test]
fn make_tea_green() {
    assert_eq!(make_tea("green"), "making green tea");
}

#[test]
fn make_tea_empty_label() {
    assert_eq!(make_tea(""), "making  tea");
}

proptest! {
    #[test]
    fn make_tea_places_label_between_prefix_and_suffix(label in ".*") {
        let sentence = make_tea(&label);
        let inner = sentence
            .strip_prefix("making ")
            .and_then(|rest| rest.strip_suffix(" tea"));
        prop_assert_eq!(inner, Some(label.as_str()));
    }
}

// ============================================================================
// order_tea
// ============================================================================

#[test_case("Chai"; "chai")]
#[test_case("Matcha"; "matcha")]
#[test_case(""; "empty")]
fn faithful_confirmation_ignores_label(tea_type: &str) {
    assert_eq!(order_tea(tea_type), "Order confirmed for chai ");
}

#[test]
fn faithful_confirmation_keeps_trailing_space() {
    assert!(order_tea("Chai").ends_with(' '));
}

#[test_case("Chai", "Order confirmed for Chai"; "chai")]
#[test_case("Matcha", "Order confirmed for Matcha"; "matcha")]
fn corrected_confirmation_echoes_label(tea_type: &str, expected: &str) {
    assert_eq!(order_tea_with(tea_type, ConfirmationMode::Corrected), expected);
}

#[test]
fn confirmation_mode_defaults_to_faithful() {
    assert_eq!(ConfirmationMode::default(), ConfirmationMode::Faithful);
}

#[test]
fn confirmation_mode_parses_and_displays() {
    for mode in [ConfirmationMode::Faithful, ConfirmationMode::Corrected] {
        assert_eq!(mode.to_string().parse::<ConfirmationMode>(), Ok(mode));
    }
    assert!("sloppy".parse::<ConfirmationMode>().is_err());
}

#[test]
fn confirmation_mode_serializes_kebab_case() {
    let json = serde_json::to_string(&ConfirmationMode::Corrected).unwrap();
    assert_eq!(json, "\"corrected\"");
}

// ============================================================================
// calculate_total
// ============================================================================

#[test]
fn calculate_total_lesson_values() {
    let total_cost = calculate_total(499, 10);
    assert_eq!(total_cost, 4990);
}

#[test_case(0, 10, 0; "zero price")]
#[test_case(-3, 4, -12; "negative price")]
#[test_case(7, 0, 0; "zero quantity")]
fn calculate_total_integers(price: i64, quantity: i64, expected: i64) {
    assert_eq!(calculate_total(price, quantity), expected);
}

#[test]
fn calculate_total_floats() {
    let total = calculate_total(4.99_f64, 10.0);
    assert!((total - 49.9).abs() < 1e-9);
}

proptest! {
    #[test]
    fn calculate_total_is_product(price in -1_000_000i64..1_000_000, quantity in -1_000_000i64..1_000_000) {
        prop_assert_eq!(calculate_total(price, quantity), price * quantity);
    }
}

// ============================================================================
// process_tea_order
// ============================================================================

#[test]
fn process_tea_order_with_label_tea() {
    assert_eq!(process_tea_order(label_tea), "makeTea : earl grey");
}

#[test]
fn process_tea_order_passes_earl_grey() {
    let mut seen = None;
    let result = process_tea_order(|tea: &str| {
        seen = Some(tea.to_string());
        tea.to_uppercase()
    });

    assert_eq!(seen.as_deref(), Some(EARL_GREY));
    assert_eq!(result, "EARL GREY");
}

#[test]
fn process_tea_order_returns_callable_result_unchanged() {
    assert_eq!(process_tea_order(|_: &str| "fixed".to_string()), "fixed");
    assert_eq!(process_tea_order(str::len), EARL_GREY.len());
}

// ============================================================================
// create_tea_maker
// ============================================================================

#[test]
fn tea_maker_green_tea() {
    let tea_maker = create_tea_maker();
    assert_eq!(tea_maker("green tea"), "Making green tea");
}

#[test]
fn tea_makers_are_independent() {
    let first = create_tea_maker();
    let second = first.clone();

    assert_eq!(first("white tea"), second("white tea"));
}

proptest! {
    #[test]
    fn tea_maker_is_pure(label in ".*") {
        let tea_maker = create_tea_maker();
        let once = tea_maker(&label);
        let twice = tea_maker(&label);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, format!("Making {label}"));
    }
}
