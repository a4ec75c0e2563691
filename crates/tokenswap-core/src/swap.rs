//! Swap form state: token selection, direction flip and validation.

use serde::Serialize;
use thiserror::Error;

use crate::format::format_fixed;
use crate::rate::{calculate, parse_amount};
use crate::{Conversion, Instrument};

const AMOUNT_DECIMALS: usize = 6;

/// Which side of the swap a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapSide {
    From,
    To,
}

/// Field-level validation failures, worded for display.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SwapFormError {
    #[error("Select a token")]
    MissingToken { side: SwapSide },
    #[error("Enter an amount")]
    EmptyAmount,
    #[error("Amount must be greater than 0")]
    InvalidAmount,
}

/// A validated swap, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapTicket {
    pub from: Instrument,
    pub to: Instrument,
    pub conversion: Conversion,
}

impl SwapTicket {
    /// `"2 ETH for 5940.594059 USD"`; the destination is blank when the rate
    /// is undefined.
    pub fn summary(&self) -> String {
        let to_amount = self
            .conversion
            .result()
            .map(|result| format_fixed(result.destination_amount, AMOUNT_DECIMALS))
            .unwrap_or_default();
        format!(
            "{} {} for {} {}",
            self.conversion.source_amount(),
            self.from.symbol,
            to_amount,
            self.to.symbol
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwapForm {
    from: Option<Instrument>,
    to: Option<Instrument>,
    from_amount: String,
}

impl SwapForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_token(&self) -> Option<&Instrument> {
        self.from.as_ref()
    }

    pub fn to_token(&self) -> Option<&Instrument> {
        self.to.as_ref()
    }

    pub fn from_amount(&self) -> &str {
        &self.from_amount
    }

    /// Replace the amount as-is, bypassing the typing mask.
    pub fn set_from_amount(&mut self, text: impl Into<String>) {
        self.from_amount = text.into();
    }

    /// Apply a keystroke-level edit to the amount field.
    ///
    /// Only unsigned decimal text (digits with at most one `.`) is accepted;
    /// any other edit leaves the field unchanged and returns `false`.
    pub fn edit_from_amount(&mut self, text: &str) -> bool {
        if !is_amount_input(text) {
            return false;
        }
        self.from_amount.clear();
        self.from_amount.push_str(text);
        true
    }

    pub fn clear_amount(&mut self) {
        self.from_amount.clear();
    }

    /// Picking the token already on the other side moves the previous
    /// selection over, so both sides never hold the same symbol.
    pub fn select_from(&mut self, instrument: Instrument) {
        if self.to.as_ref().is_some_and(|to| to.symbol == instrument.symbol) {
            self.to = self.from.take();
        }
        self.from = Some(instrument);
    }

    pub fn select_to(&mut self, instrument: Instrument) {
        if self.from.as_ref().is_some_and(|from| from.symbol == instrument.symbol) {
            self.from = self.to.take();
        }
        self.to = Some(instrument);
    }

    /// Reverse the direction. The displayed destination amount becomes the
    /// new source amount.
    pub fn flip(&mut self) {
        let to_amount = self.to_amount_display();
        std::mem::swap(&mut self.from, &mut self.to);
        self.from_amount = to_amount;
    }

    pub fn conversion(&self) -> Option<Conversion> {
        calculate(self.from.as_ref(), self.to.as_ref(), &self.from_amount)
    }

    /// Destination amount with six decimals; empty without a priced conversion.
    pub fn to_amount_display(&self) -> String {
        self.conversion()
            .as_ref()
            .and_then(Conversion::result)
            .map(|result| format_fixed(result.destination_amount, AMOUNT_DECIMALS))
            .unwrap_or_default()
    }

    /// Every failing field, in form order.
    pub fn field_errors(&self) -> Vec<SwapFormError> {
        let mut errors = Vec::new();
        if self.from.is_none() {
            errors.push(SwapFormError::MissingToken {
                side: SwapSide::From,
            });
        }
        if self.to.is_none() {
            errors.push(SwapFormError::MissingToken { side: SwapSide::To });
        }
        if let Err(error) = check_amount(&self.from_amount) {
            errors.push(error);
        }
        errors
    }

    pub fn validate(&self) -> Result<SwapTicket, SwapFormError> {
        if let Some(error) = self.field_errors().into_iter().next() {
            return Err(error);
        }

        match (&self.from, &self.to, self.conversion()) {
            (Some(from), Some(to), Some(conversion)) => Ok(SwapTicket {
                from: from.clone(),
                to: to.clone(),
                conversion,
            }),
            _ => Err(SwapFormError::InvalidAmount),
        }
    }

    /// Label for the submit action in the current state.
    pub fn action_label(&self) -> &'static str {
        if self.from.is_none() || self.to.is_none() {
            return "Select a token";
        }
        match check_amount(&self.from_amount) {
            Err(SwapFormError::EmptyAmount) => "Enter an amount",
            Err(_) => "Enter a valid amount",
            Ok(()) => "Swap",
        }
    }
}

fn is_amount_input(text: &str) -> bool {
    text.chars().all(|ch| ch.is_ascii_digit() || ch == '.') && text.matches('.').count() <= 1
}

fn check_amount(text: &str) -> Result<(), SwapFormError> {
    if text.trim().is_empty() {
        return Err(SwapFormError::EmptyAmount);
    }
    parse_amount(text)
        .map(|_| ())
        .ok_or(SwapFormError::InvalidAmount)
}
