use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::{Currency, InputValue};

static NON_NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.]").expect("valid budget cleaner regex"));

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBudget {
    /// Currency the traveller typed; only used as a display label.
    pub currency: Currency,
    /// Amount as entered, in the traveller's currency.
    pub entered: f64,
    /// Amount in base currency units (INR). All planning math uses this.
    pub base_amount: f64,
}

pub fn detect_currency(raw: &str) -> Currency {
    if raw.contains('$') {
        Currency::Usd
    } else {
        Currency::Inr
    }
}

/// Keeps digits and dots, then parses. Anything unparseable is zero.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

pub fn normalize_budget(budget: &InputValue, usd_rate: f64) -> NormalizedBudget {
    let raw = budget.as_text();
    let currency = detect_currency(&raw);
    let entered = parse_amount(&raw);

    let base_amount = match currency {
        Currency::Usd => (entered * usd_rate).round(),
        Currency::Inr => entered,
    };

    debug!(
        currency = currency.code(),
        entered,
        base_amount,
        "budget normalized"
    );

    NormalizedBudget {
        currency,
        entered,
        base_amount,
    }
}
