//! Behavior-driven tests for wallet balance rows
//!
//! These tests verify WHAT a user sees on the wallet page: which balances
//! are listed, in what order, and how they are valued.

use tokenswap_core::{format_balances, parse_feed, reduce, wallet_rows, Blockchain, WalletBalance};

fn balances() -> Vec<WalletBalance> {
    serde_json::from_str(
        r#"[
            {"currency":"ETH","amount":1.25,"blockchain":"Ethereum"},
            {"currency":"OSMO","amount":100,"blockchain":"Osmosis"},
            {"currency":"ZIL","amount":0,"blockchain":"Zilliqa"},
            {"currency":"NEO","amount":3.456,"blockchain":"Neo"},
            {"currency":"SOL","amount":9,"blockchain":"Solana"},
            {"currency":"ARB","amount":12,"blockchain":"Arbitrum"}
        ]"#,
    )
    .expect("balances are valid JSON")
}

#[test]
fn user_sees_positive_known_chain_balances_by_priority() {
    // Given: Balances across known and unknown chains
    let balances = balances();

    // When: They are formatted for display
    let formatted = format_balances(&balances);

    // Then: Empty and unknown-chain balances are hidden, highest priority first
    let listed: Vec<(&str, &str)> = formatted
        .iter()
        .map(|b| (b.currency.as_str(), b.formatted.as_str()))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("OSMO", "100.00"),
            ("ETH", "1.25"),
            ("ARB", "12.00"),
            ("NEO", "3.46"),
        ]
    );
    assert_eq!(formatted[0].blockchain, Blockchain::Osmosis);
}

#[test]
fn user_sees_usd_value_for_priced_currencies_only() {
    // Given: A price feed covering some of the wallet's currencies
    let feed = parse_feed(
        r#"[
            {"currency":"ETH","date":"2024-01-01","price":2000},
            {"currency":"ETH","date":"2024-01-02","price":2200},
            {"currency":"OSMO","date":"2024-01-01","price":0.5}
        ]"#,
    )
    .expect("valid feed");
    let catalog = reduce(&feed);

    // When: Wallet rows are built
    let rows = wallet_rows(&format_balances(&balances()), &catalog);

    // Then: Priced rows carry a USD value at the latest price
    assert_eq!(rows[0].usd_value, Some(50.0));
    assert_eq!(rows[1].usd_value, Some(2750.0));

    // And: Unpriced rows have no value rather than zero
    assert_eq!(rows[2].currency, "ARB");
    assert_eq!(rows[2].usd_value, None);
}
