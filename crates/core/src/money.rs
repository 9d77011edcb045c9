//! Money value object: minor units plus currency.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Currency of a price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "\u{20ac}",
            Currency::Gbp => "\u{a3}",
        }
    }

    /// Minor units per major unit.
    pub fn minor_per_major(self) -> u64 {
        100
    }
}

/// Amount in the smallest currency unit (e.g. cents).
///
/// Zero is a legal amount; callers decide what it means.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: u64,
    currency: Currency,
}

impl Money {
    pub const fn new(amount: u64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub const fn usd(amount: u64) -> Self {
        Self::new(amount, Currency::Usd)
    }

    pub fn amount(self) -> u64 {
        self.amount
    }

    pub fn is_zero(self) -> bool {
        self.amount == 0
    }

    pub fn currency(self) -> Currency {
        self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    /// Renders e.g. `$109.00` (symbol, major units, two-digit minor part).
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let per_major = self.currency.minor_per_major();
        write!(
            f,
            "{}{}.{:02}",
            self.currency.symbol(),
            self.amount / per_major,
            self.amount % per_major
        )
    }
}
