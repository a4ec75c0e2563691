//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PriceEntry`] | Raw, possibly malformed feed record |
//! | [`Instrument`] | Latest resolved price for one symbol |
//! | [`Catalog`] | Deduplicated instruments in collation order |
//! | [`Conversion`] | Priced conversion or an undefined-rate outcome |
//! | [`Symbol`] | Validated, case-preserving token symbol |
//! | [`UtcDateTime`] | Feed timestamp normalized to UTC |

mod catalog;
mod models;
mod symbol;
mod timestamp;

pub use catalog::Catalog;
pub use models::{
    Conversion, ConversionResult, Instrument, PriceEntry, UndefinedRateCause,
};
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
