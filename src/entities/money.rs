// 💵 Money Value Type
// An amount in one of four currencies, converted through USD
//
// Rate table (units of USD per unit of currency):
//   GBP → 2.0, EUR → 2/3, CAN → 4/5, USD → 1.0, anything else → 0.0
//
// The zero rate for unknown codes silently zeroes amounts. That is the
// default behavior; `RatePolicy::Strict` turns it into an error instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::{DomainError, Result};

// ============================================================================
// CURRENCY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    /// US dollar, the pivot every conversion goes through
    Usd,

    /// British pound
    Gbp,

    /// Euro
    Eur,

    /// Canadian dollar
    Can,

    /// Any other code, kept verbatim. Converts at rate 0.0.
    /// Only `Currency::parse` builds one, so it never holds a supported code.
    Unsupported(UnsupportedCode),
}

/// A currency code outside the rate table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsupportedCode(String);

impl UnsupportedCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Currency {
    /// Supported currencies, in rate-table order
    pub const SUPPORTED: [Currency; 4] = [Currency::Usd, Currency::Gbp, Currency::Eur, Currency::Can];

    pub fn parse(code: &str) -> Currency {
        match code {
            "USD" => Currency::Usd,
            "GBP" => Currency::Gbp,
            "EUR" => Currency::Eur,
            "CAN" => Currency::Can,
            other => Currency::Unsupported(UnsupportedCode(other.to_string())),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Can => "CAN",
            Currency::Unsupported(code) => code.as_str(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Currency::Unsupported(_))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::parse(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency::parse(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

/// How many USD one unit of `currency` is worth. Unknown codes get 0.0.
pub fn rate_to_usd(currency: &Currency) -> f64 {
    match currency {
        Currency::Gbp => 2.0,
        Currency::Eur => 2.0 / 3.0,
        Currency::Can => 4.0 / 5.0,
        Currency::Usd => 1.0,
        Currency::Unsupported(_) => 0.0,
    }
}

// ============================================================================
// RATE POLICY
// ============================================================================

/// What to do when a conversion touches an unsupported currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RatePolicy {
    /// Use the 0.0 rate and carry on
    #[default]
    ZeroRate,

    /// Reject with `DomainError::UnsupportedCurrency`, leaving the amount untouched
    Strict,
}

impl RatePolicy {
    fn check(&self, currencies: &[&Currency]) -> Result<()> {
        if *self == RatePolicy::ZeroRate {
            return Ok(());
        }
        match currencies.iter().find(|c| !c.is_supported()) {
            Some(unsupported) => Err(DomainError::unsupported_currency(unsupported.code())),
            None => Ok(()),
        }
    }
}

// ============================================================================
// MONEY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in units of `currency`
    pub amount: f64,

    /// Currency the amount is quoted in
    pub currency: Currency,
}

/// In-place arithmetic across currencies
pub trait Mathematics {
    fn add(&mut self, other: &Money);
    fn subtract(&mut self, other: &Money);
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<Currency>) -> Self {
        Money {
            amount,
            currency: currency.into(),
        }
    }

    /// Advisory only: nothing stops an unsupported `Money` from being built or converted
    pub fn is_valid_type(money: &Money) -> bool {
        money.currency.is_supported()
    }

    pub fn is_valid(&self) -> bool {
        Money::is_valid_type(self)
    }

    /// Convert in place via USD, using the zero-rate fallback for unknown codes
    pub fn convert(&mut self, target: impl Into<Currency>) {
        self.apply_conversion(target.into());
    }

    pub fn convert_with(&mut self, target: impl Into<Currency>, policy: RatePolicy) -> Result<()> {
        let target = target.into();
        policy.check(&[&self.currency, &target])?;
        self.apply_conversion(target);
        Ok(())
    }

    pub fn add_with(&mut self, other: &Money, policy: RatePolicy) -> Result<()> {
        policy.check(&[&self.currency, &other.currency])?;
        self.combine(other, |a, b| a + b);
        Ok(())
    }

    pub fn subtract_with(&mut self, other: &Money, policy: RatePolicy) -> Result<()> {
        policy.check(&[&self.currency, &other.currency])?;
        self.combine(other, |a, b| a - b);
        Ok(())
    }

    fn apply_conversion(&mut self, target: Currency) {
        let from_rate = rate_to_usd(&self.currency);
        let to_rate = rate_to_usd(&target);

        if from_rate == 0.0 || to_rate == 0.0 {
            warn!(
                from = %self.currency,
                to = %target,
                amount = self.amount,
                "converting through a zero exchange rate"
            );
        }

        self.amount *= from_rate;
        self.amount *= 1.0 / to_rate;
        self.currency = target;
    }

    /// Both sides go to USD, combine, then back to our original currency.
    /// `other` is copied so the caller's value never changes.
    fn combine<F>(&mut self, other: &Money, op: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        let original = self.currency.clone();
        let mut other = other.clone();

        self.apply_conversion(Currency::Usd);
        other.apply_conversion(Currency::Usd);
        self.amount = op(self.amount, other.amount);
        self.apply_conversion(original);
    }
}

impl Mathematics for Money {
    fn add(&mut self, other: &Money) {
        self.combine(other, |a, b| a + b);
    }

    fn subtract(&mut self, other: &Money) {
        self.combine(other, |a, b| a - b);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, format_amount(self.amount))
    }
}

/// Render an amount the way the descriptions expect: `25.0`, `101.55`,
/// `1e+16`, `1e-07`, `inf`, `nan`
pub(crate) fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "nan".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Debug keeps the trailing ".0" on integral values, Display drops it
    let rendered = format!("{:?}", amount);
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => rendered,
    }
}

// ============================================================================
// f64 EXTENSIONS
// ============================================================================

/// `34.0_f64.can()` reads better than `Money::new(34.0, "CAN")` in call sites
pub trait IntoMoney {
    fn usd(self) -> Money;
    fn gbp(self) -> Money;
    fn eur(self) -> Money;
    fn can(self) -> Money;
}

impl IntoMoney for f64 {
    fn usd(self) -> Money {
        Money::new(self, Currency::Usd)
    }

    fn gbp(self) -> Money {
        Money::new(self, Currency::Gbp)
    }

    fn eur(self) -> Money {
        Money::new(self, Currency::Eur)
    }

    fn can(self) -> Money {
        Money::new(self, Currency::Can)
    }
}

// ============================================================================
// TESTS
// ============================================================================
