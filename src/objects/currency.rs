use super::AppError;
use num_format::{CustomFormat, Grouping, ToFormattedString};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

const NBSP: &str = "\u{a0}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Rub, Currency::Usd, Currency::Eur];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Rub => "₽",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Rub
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Conversion rates from the base currency (RUB) into each display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub rub: f64,
    pub usd: f64,
    pub eur: f64,
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self {
            rub: 1.0,
            usd: 0.013,
            eur: 0.012,
        }
    }
}

impl CurrencyRates {
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => self.rub,
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
        }
    }

    pub fn convert(&self, amount_base: f64, target: Currency) -> f64 {
        amount_base * self.rate(target)
    }

    /// Converts a base amount and formats it the way ru-RU renders currency values.
    pub fn format(&self, amount_base: f64, target: Currency) -> Result<String, AppError> {
        format_amount(self.convert(amount_base, target), target)
    }
}

/// Formats an amount already expressed in `currency`.
///
/// Up to two fraction digits are shown and trailing zeros are dropped. The
/// integer part is grouped by thousands only from five digits on, and the
/// symbol follows the number after a no-break space.
pub fn format_amount(amount: f64, currency: Currency) -> Result<String, AppError> {
    if !amount.is_finite() {
        return Err(format!("cannot format non-finite amount {}", amount).into());
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let integer = cents / 100;
    let fraction = cents % 100;
    let sign = match amount < 0.0 && cents > 0 {
        true => "-",
        false => "",
    };

    let integer_part = match integer >= 10_000 {
        true => {
            let format = CustomFormat::builder()
                .grouping(Grouping::Standard)
                .separator(NBSP)
                .build()?;
            integer.to_formatted_string(&format)
        }
        false => integer.to_string(),
    };
    let fraction_part = match (fraction, fraction % 10) {
        (0, _) => String::new(),
        (f, 0) => format!(",{}", f / 10),
        (f, _) => format!(",{:02}", f),
    };

    Ok(format!(
        "{}{}{}{}{}",
        sign,
        integer_part,
        fraction_part,
        NBSP,
        currency.symbol()
    ))
}
