use serde::Serialize;
use tokenswap_core::{
    calculate, format_fixed, format_rate, Conversion, EnvelopeError, Instrument,
    UndefinedRateCause, UNDEFINED_DISPLAY,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::{CommandResult, FeedContext};

#[derive(Debug, Serialize)]
struct QuoteResponseData<'a> {
    from: Option<&'a Instrument>,
    to: Option<&'a Instrument>,
    amount: &'a str,
    conversion: Option<Conversion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display: Option<QuoteDisplay>,
}

/// Strings as a swap form would show them.
#[derive(Debug, Serialize)]
struct QuoteDisplay {
    to_amount: String,
    rate: String,
    inverse_rate: String,
}

impl QuoteDisplay {
    fn new(from: &Instrument, to: &Instrument, conversion: &Conversion) -> Self {
        match conversion.result() {
            Some(result) => Self {
                to_amount: format_fixed(result.destination_amount, 6),
                rate: format!("1 {} = {} {}", from.symbol, format_rate(result.forward_rate), to.symbol),
                inverse_rate: format!(
                    "1 {} = {} {}",
                    to.symbol,
                    format_rate(result.inverse_rate),
                    from.symbol
                ),
            },
            None => Self {
                to_amount: String::new(),
                rate: format!("1 {} = {} {}", from.symbol, UNDEFINED_DISPLAY, to.symbol),
                inverse_rate: format!("1 {} = {} {}", to.symbol, UNDEFINED_DISPLAY, from.symbol),
            },
        }
    }
}

pub fn run(args: &QuoteArgs, context: &FeedContext) -> Result<CommandResult, CliError> {
    let from = context.catalog.get(args.from.trim());
    let to = context.catalog.get(args.to.trim());
    let conversion = calculate(from, to, &args.amount);

    let display = match (from, to, &conversion) {
        (Some(from), Some(to), Some(conversion)) => Some(QuoteDisplay::new(from, to, conversion)),
        _ => None,
    };

    let data = serde_json::to_value(QuoteResponseData {
        from,
        to,
        amount: &args.amount,
        conversion,
        display,
    })?;

    let mut result = CommandResult::ok(data);
    if from.is_none() {
        result = result.with_warning(format!("'{}' is not in the catalog", args.from));
    }
    if to.is_none() {
        result = result.with_warning(format!("'{}' is not in the catalog", args.to));
    }
    if from.is_some() && to.is_some() && conversion.is_none() {
        result = result.with_warning("amount must be a number greater than 0");
    }
    if let Some(Conversion::UndefinedRate { cause, .. }) = conversion {
        result = result.with_error(EnvelopeError::new("undefined_rate", undefined_message(cause))?);
    }

    Ok(result)
}

fn undefined_message(cause: UndefinedRateCause) -> &'static str {
    match cause {
        UndefinedRateCause::ZeroSourcePrice => "source token is priced at 0",
        UndefinedRateCause::ZeroDestinationPrice => "destination token is priced at 0",
        UndefinedRateCause::ZeroPrices => "both tokens are priced at 0",
        UndefinedRateCause::Overflow => "rate is outside the representable range",
    }
}
