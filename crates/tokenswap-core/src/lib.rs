//! # Tokenswap Core
//!
//! Price feed reduction and swap-rate calculation.
//!
//! ## Overview
//!
//! Two pure stages make up the pipeline:
//!
//! - **Quote reduction**: a raw, duplicated, time-stamped feed collapses to one
//!   latest [`Instrument`] per symbol, collected into a sorted [`Catalog`].
//! - **Rate calculation**: two instruments and an amount typed by the user
//!   give a [`Conversion`], formatted for display by [`format_rate`].
//!
//! Around them sit the swap form rules ([`SwapForm`]), wallet balance rows
//! ([`wallet`]) and the response [`Envelope`] used by the CLI.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`collation`] | Locale-style symbol ordering |
//! | [`domain`] | Feed records, instruments, catalog, conversions |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`feed`] | Feed snapshot decoding |
//! | [`format`] | Rate, price and amount formatting |
//! | [`icon`] | Icon references and fallback badges |
//! | [`rate`] | Amount parsing and conversion |
//! | [`reducer`] | Latest-quote reduction |
//! | [`swap`] | Swap form state and validation |
//! | [`wallet`] | Wallet balance ordering and valuation |
//!
//! ## Quick Start
//!
//! ```rust
//! use tokenswap_core::{calculate, format_rate, reduce, PriceEntry};
//!
//! let feed = vec![
//!     PriceEntry::new("USD", "2024-01-01", 1.0),
//!     PriceEntry::new("USD", "2024-01-02", 1.01),
//!     PriceEntry::new("ETH", "2024-01-01", 3000.0),
//! ];
//! let catalog = reduce(&feed);
//!
//! let conversion = calculate(catalog.get("ETH"), catalog.get("USD"), "2").unwrap();
//! let result = conversion.result().unwrap();
//! assert_eq!(format_rate(result.forward_rate), "2,970.297030");
//! ```
//!
//! ## Error Handling
//!
//! Missing selections and unusable amounts are absence (`None`), malformed
//! feed records are normalized, and zero prices produce
//! [`Conversion::UndefinedRate`]. Only input that cannot be represented at
//! all (an invalid [`Symbol`], a feed document that is not a JSON array)
//! surfaces as an error.

pub mod collation;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod feed;
pub mod format;
pub mod icon;
pub mod rate;
pub mod reducer;
pub mod swap;
pub mod wallet;

pub use domain::{
    Catalog, Conversion, ConversionResult, Instrument, PriceEntry, Symbol, UndefinedRateCause,
    UtcDateTime,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, ValidationError};
pub use feed::{parse_feed, read_feed};
pub use format::{format_fixed, format_price, format_rate, UNDEFINED_DISPLAY};
pub use icon::{fallback_color, icon_ref, initials, IconBase, DEFAULT_ICON_BASE_URL};
pub use rate::{calculate, convert, parse_amount};
pub use reducer::{reduce, QuoteReducer, ReductionReport};
pub use swap::{SwapForm, SwapFormError, SwapSide, SwapTicket};
pub use wallet::{
    format_balances, wallet_rows, Blockchain, FormattedWalletBalance, WalletBalance, WalletRow,
};
