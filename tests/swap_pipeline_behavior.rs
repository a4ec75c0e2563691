//! Behavior-driven tests for the swap pipeline
//!
//! These tests verify WHAT a user sees when a price feed is turned into a
//! token catalog and a conversion between two tokens.

use approx::assert_relative_eq;
use proptest::prelude::*;
use tokenswap_core::{
    calculate, format_rate, reduce, Conversion, PriceEntry, SwapForm, UndefinedRateCause,
};

fn scenario_feed() -> Vec<PriceEntry> {
    vec![
        PriceEntry::new("USD", "2024-01-01", 1.0),
        PriceEntry::new("USD", "2024-01-02", 1.01),
        PriceEntry::new("ETH", "2024-01-01", 3000.0),
    ]
}

// =============================================================================
// Pipeline: Feed to Catalog
// =============================================================================

#[test]
fn user_sees_one_alphabetical_entry_per_token_with_latest_price() {
    // Given: A feed where USD was quoted twice
    let feed = scenario_feed();

    // When: The feed is reduced
    let catalog = reduce(&feed);

    // Then: Each token appears once, alphabetically, at its latest price
    let listed: Vec<(&str, f64)> = catalog
        .iter()
        .map(|instrument| (instrument.symbol.as_str(), instrument.price))
        .collect();
    assert_eq!(listed, vec![("ETH", 3000.0), ("USD", 1.01)]);

    // And: Every token has an icon reference derived from its symbol
    assert!(catalog
        .iter()
        .all(|instrument| instrument.icon_ref.ends_with(&format!("/{}.svg", instrument.symbol))));
}

// =============================================================================
// Pipeline: Conversion
// =============================================================================

#[test]
fn user_converting_two_eth_to_usd_sees_expected_amount_and_rates() {
    // Given: The reduced catalog
    let catalog = reduce(&scenario_feed());

    // When: The user converts 2 ETH to USD
    let conversion = calculate(catalog.get("ETH"), catalog.get("USD"), "2")
        .expect("both tokens and the amount are valid");

    // Then: The destination amount and rates match the latest prices
    let result = conversion.result().expect("prices are non-zero");
    assert_relative_eq!(result.destination_amount, 5940.59, epsilon = 0.01);
    assert_relative_eq!(result.forward_rate, 2970.297, epsilon = 0.001);
    assert_relative_eq!(result.inverse_rate, 1.01 / 3000.0, max_relative = 1e-12);

    // And: The rates render for display
    assert_eq!(format_rate(result.forward_rate), "2,970.297030");
    assert_eq!(format_rate(result.inverse_rate), "0.000337");
}

#[test]
fn reverse_conversion_inverse_rate_matches_forward_rate() {
    // Given: The reduced catalog
    let catalog = reduce(&scenario_feed());

    // When: The user converts in both directions
    let forward = calculate(catalog.get("ETH"), catalog.get("USD"), "2").expect("valid");
    let backward = calculate(catalog.get("USD"), catalog.get("ETH"), "5940.59").expect("valid");

    // Then: The reverse inverse rate is the forward rate
    let forward = forward.result().expect("priced");
    let backward = backward.result().expect("priced");
    assert_relative_eq!(backward.inverse_rate, forward.forward_rate, max_relative = 1e-12);
}

#[test]
fn user_without_a_valid_amount_sees_no_result() {
    let catalog = reduce(&scenario_feed());

    for text in ["", "0", "-5", "abc"] {
        assert!(
            calculate(catalog.get("ETH"), catalog.get("USD"), text).is_none(),
            "{text:?} should produce no result"
        );
    }
}

#[test]
fn user_selecting_unknown_token_sees_no_result() {
    let catalog = reduce(&scenario_feed());
    assert!(calculate(catalog.get("ETH"), catalog.get("DOGE"), "1").is_none());
}

#[test]
fn zero_priced_destination_is_reported_as_undefined_rate() {
    // Given: A token whose latest price is zero
    let feed = vec![
        PriceEntry::new("ETH", "2024-01-01", 3000.0),
        PriceEntry::new("LUNA", "2022-05-01", 80.0),
        PriceEntry::new("LUNA", "2022-05-13", 0.0),
    ];
    let catalog = reduce(&feed);

    // When: The user converts into it
    let conversion = calculate(catalog.get("ETH"), catalog.get("LUNA"), "1").expect("in domain");

    // Then: The outcome is an explicit undefined rate, never an infinite number
    assert_eq!(
        conversion,
        Conversion::UndefinedRate {
            source_amount: 1.0,
            cause: UndefinedRateCause::ZeroDestinationPrice,
        }
    );
}

// =============================================================================
// Pipeline: Swap Form Journey
// =============================================================================

#[test]
fn user_fills_form_flips_direction_and_submits() {
    // Given: A catalog and an empty form
    let catalog = reduce(&scenario_feed());
    let mut form = SwapForm::new();
    assert_eq!(form.action_label(), "Select a token");

    // When: The user picks ETH -> USD and types an amount
    form.select_from(catalog.get("ETH").cloned().expect("listed"));
    form.select_to(catalog.get("USD").cloned().expect("listed"));
    assert_eq!(form.action_label(), "Enter an amount");
    assert!(form.edit_from_amount("2"));

    // And: A non-numeric keystroke is ignored
    assert!(!form.edit_from_amount("2x"));
    assert_eq!(form.from_amount(), "2");

    // Then: The destination field shows the converted amount
    assert_eq!(form.to_amount_display(), "5940.594059");
    assert_eq!(form.action_label(), "Swap");

    // When: The user flips the direction
    form.flip();

    // Then: USD is now the source with the previous destination amount
    assert_eq!(form.from_token().map(|i| i.symbol.as_str()), Some("USD"));
    assert_eq!(form.from_amount(), "5940.594059");

    // And: The form validates into a ticket
    let ticket = form.validate().expect("form is complete");
    assert_eq!(ticket.to.symbol.as_str(), "ETH");
}

// =============================================================================
// Properties
// =============================================================================

const SYMBOLS: [&str; 4] = ["ATOM", "bNEO", "ETH", "usd"];

fn feed_strategy() -> impl Strategy<Value = Vec<(usize, u8, u32)>> {
    prop::collection::vec((0..SYMBOLS.len(), 1u8..=28, 0u32..1_000_000), 0..40)
}

fn to_feed(raw: &[(usize, u8, u32)]) -> Vec<PriceEntry> {
    raw.iter()
        .map(|(symbol, day, cents)| {
            PriceEntry::new(
                SYMBOLS[*symbol],
                format!("2024-02-{day:02}"),
                f64::from(*cents) / 100.0,
            )
        })
        .collect()
}

proptest! {
    #[test]
    fn reduce_keeps_first_entry_with_max_timestamp(raw in feed_strategy()) {
        let feed = to_feed(&raw);
        let catalog = reduce(&feed);

        for (index, symbol) in SYMBOLS.iter().enumerate() {
            let matching: Vec<&(usize, u8, u32)> =
                raw.iter().filter(|(s, _, _)| *s == index).collect();
            let listed = catalog.get(symbol);

            if matching.is_empty() {
                prop_assert!(listed.is_none());
                continue;
            }

            let max_day = matching.iter().map(|(_, day, _)| *day).max().unwrap_or_default();
            let expected = matching
                .iter()
                .find(|(_, day, _)| *day == max_day)
                .map(|(_, _, cents)| f64::from(*cents) / 100.0);
            prop_assert_eq!(listed.map(|i| i.price), expected);
        }
    }

    #[test]
    fn reduce_is_sorted_unique_and_idempotent(raw in feed_strategy()) {
        let feed = to_feed(&raw);
        let first = reduce(&feed);
        let second = reduce(&feed);

        prop_assert_eq!(&first, &second);
        let symbols: Vec<&str> = first.iter().map(|i| i.symbol.as_str()).collect();
        let mut expected: Vec<&str> = SYMBOLS
            .iter()
            .enumerate()
            .filter(|(index, _)| raw.iter().any(|(s, _, _)| s == index))
            .map(|(_, symbol)| *symbol)
            .collect();
        expected.sort_by_key(|symbol| symbol.to_lowercase());
        prop_assert_eq!(symbols, expected);
    }

    #[test]
    fn destination_over_source_equals_price_ratio(
        source_price in 0.0001f64..100_000.0,
        destination_price in 0.0001f64..100_000.0,
        amount in 0.0001f64..1_000_000.0,
    ) {
        let feed = vec![
            PriceEntry::new("AAA", "2024-01-01", source_price),
            PriceEntry::new("BBB", "2024-01-01", destination_price),
        ];
        let catalog = reduce(&feed);
        let text = amount.to_string();

        let forward = calculate(catalog.get("AAA"), catalog.get("BBB"), &text)
            .and_then(|c| c.result().copied());
        let forward = forward.expect("positive prices and amount are priced");

        let ratio = source_price / destination_price;
        prop_assert!(((forward.destination_amount / forward.source_amount) - ratio).abs() <= ratio * 1e-12);
        prop_assert!((forward.forward_rate * forward.inverse_rate - 1.0).abs() <= 1e-12);

        let backward = calculate(catalog.get("BBB"), catalog.get("AAA"), &text)
            .and_then(|c| c.result().copied())
            .expect("priced");
        prop_assert!((backward.inverse_rate - forward.forward_rate).abs() <= forward.forward_rate * 1e-12);
    }
}
