//! Icon references and the fallback badge shown when an icon is unavailable.
//!
//! Nothing here checks that an icon exists; loading the reference is the
//! caller's concern.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Symbol, ValidationError};

/// Public token icon repository.
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Base location that icon references are built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconBase(String);

impl IconBase {
    /// Trailing slashes are stripped so references never contain `//`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(ValidationError::EmptyIconBase);
        }

        Ok(Self(normalized.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<base>/<symbol>.svg`
    pub fn icon_ref(&self, symbol: &Symbol) -> String {
        format!("{}/{}.svg", self.0, symbol.as_str())
    }
}

impl Default for IconBase {
    fn default() -> Self {
        Self(DEFAULT_ICON_BASE_URL.to_owned())
    }
}

impl Display for IconBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for IconBase {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IconBase> for String {
    fn from(value: IconBase) -> Self {
        value.0
    }
}

/// Icon reference under the default base.
pub fn icon_ref(symbol: &Symbol) -> String {
    IconBase::default().icon_ref(symbol)
}

/// Stable badge colour for a symbol, as a CSS `hsl()` string.
///
/// Uses the 32-bit `h = c + (h << 5) - h` string hash over UTF-16 code
/// units; the shift wraps at 32 bits while the running sum does not.
pub fn fallback_color(symbol: &str) -> String {
    let mut hash: i64 = 0;
    for unit in symbol.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5);
        hash = i64::from(unit) + (i64::from(shifted) - hash);
    }

    let hue = (hash % 360).abs();
    format!("hsl({hue}, 70%, 50%)")
}

/// First two characters, upper-cased.
pub fn initials(symbol: &str) -> String {
    symbol.chars().take(2).collect::<String>().to_uppercase()
}
