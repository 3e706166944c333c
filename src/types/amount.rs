use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DISPLAY_PLACES: u32 = 2;

/// Balance every session starts with.
pub const OPENING_BALANCE: Amount = Amount(Decimal::ONE_THOUSAND);

/// A quantity of money in the session's single implicit currency.
///
/// Arithmetic keeps full decimal precision. Only `Display` (and therefore every
/// user-facing message) rounds to two places, half away from zero.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    #[cfg(test)]
    pub fn new(value: Decimal) -> Self {
        Amount(value)
    }

    #[cfg(test)]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        *self > Amount::ZERO
    }

    /// Whether the value still fits the decimal mantissa once shown with two places.
    pub fn is_displayable(&self) -> bool {
        self.display_value().scale() == DISPLAY_PLACES
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    fn display_value(&self) -> Decimal {
        let mut rounded = self.0.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_PLACES);
        rounded
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut rounded = self.display_value();

        //NOTE: "-0.00" can come out of rounding a tiny negative value, print it unsigned
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        write!(formatter, "{rounded}")?;

        //NOTE: rescale stops short when the mantissa is full, pad the missing places by hand
        match rounded.scale() {
            0 => write!(formatter, ".{:0<width$}", "", width = DISPLAY_PLACES as usize),
            scale if scale < DISPLAY_PLACES => write!(formatter, "{:0<width$}", "", width = (DISPLAY_PLACES - scale) as usize),
            _ => Ok(())
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses free-text input as typed by the user.
    ///
    /// Leading and trailing whitespace is ignored. Plain decimals (`200`, `12.5`)
    /// and scientific notation (`1e3`, `2.5E-1`) are accepted, digit separators (`1_000`) are not. The sign is not checked here;
    /// positivity is a ledger rule.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::Empty);
        }

        if value.contains('_') {
            return Err(AmountError::InvalidFormat(format!("'{value}' contains digit separators")));
        }

        let parsed = if value.contains(['e', 'E']) {
            Decimal::from_scientific(&value.to_ascii_lowercase())
        } else {
            Decimal::from_str(value)
        };

        parsed
            .map(Amount)
            .map_err(|error| AmountError::InvalidFormat(format!("'{value}' is not a number: {error}")))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
