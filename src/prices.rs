//! Prices

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// A monetary amount, stored in the currency's minor units.
pub type Price = Money<'static, Currency>;

/// Multiplies a unit price by a quantity.
pub fn times(price: &Price, quantity: u32) -> Price {
    Money::from_minor(
        price.to_minor_units().saturating_mul(i64::from(quantity)),
        price.currency(),
    )
}

/// Converts a major-unit decimal amount (e.g. `149.50`) into minor units for `currency`.
///
/// Precision beyond the currency's minor unit is rounded half away from zero.
/// Returns `None` if the amount does not fit in an `i64` of minor units.
pub fn decimal_to_minor(amount: Decimal, currency: &Currency) -> Option<i64> {
    let scale = 10_i64.checked_pow(currency.exponent)?;

    amount
        .checked_mul(Decimal::from(scale))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{JPY, PHP};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn times_scales_minor_units() {
        let price = Money::from_minor(11_050, PHP);

        assert_eq!(times(&price, 3), Money::from_minor(33_150, PHP));
        assert_eq!(times(&price, 0), Money::from_minor(0, PHP));
    }

    #[test]
    fn decimal_to_minor_uses_currency_exponent() -> TestResult {
        let amount: Decimal = "149.50".parse()?;

        assert_eq!(decimal_to_minor(amount, PHP), Some(14_950));
        assert_eq!(decimal_to_minor(Decimal::from(500), JPY), Some(500));

        Ok(())
    }

    #[test]
    fn decimal_to_minor_rounds_half_away_from_zero() -> TestResult {
        let amount: Decimal = "0.125".parse()?;

        assert_eq!(decimal_to_minor(amount, PHP), Some(13));

        Ok(())
    }
}
