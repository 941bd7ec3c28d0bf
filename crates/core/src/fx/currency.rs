//! Currency normalization helpers.
//!
//! The reporting currency is KRW. A holding is either USD-denominated
//! (multiply by the USD/KRW rate) or already in KRW (pass through). The
//! detection predicate lives here and nowhere else: explicit `currency`
//! wins, the `country` string match is only the fallback for legacy records
//! that never had a currency set.

use rust_decimal::Decimal;

use super::fx_model::ExchangeRate;

/// ISO code of the only foreign currency the engine converts.
pub const USD: &str = "USD";

/// Country labels that imply USD when no explicit currency is present.
const USD_COUNTRY_NAMES: &[&str] = &["미국", "US"];

/// Whether a holding described by (currency, country) is USD-denominated.
pub fn is_usd_denominated(currency: Option<&str>, country: Option<&str>) -> bool {
    match currency {
        Some(code) => code == USD,
        None => country.is_some_and(|c| USD_COUNTRY_NAMES.contains(&c)),
    }
}

/// Converts a nominal value into the reporting currency.
///
/// The caller validates the rate once per calculation pass; both current
/// value and cost basis must go through this with the same rate so profit
/// and ROI stay currency-consistent.
pub fn to_reporting_currency(value: Decimal, usd_denominated: bool, rate: &ExchangeRate) -> Decimal {
    if usd_denominated {
        value * rate.rate
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    #[test]
    fn explicit_currency_wins_over_country() {
        // KRW-listed holding of a US company: currency says KRW, keep it.
        assert!(!is_usd_denominated(Some("KRW"), Some("미국")));
        assert!(is_usd_denominated(Some("USD"), Some("한국")));
    }

    #[test]
    fn country_fallback_applies_without_currency() {
        assert!(is_usd_denominated(None, Some("미국")));
        assert!(is_usd_denominated(None, Some("US")));
        assert!(!is_usd_denominated(None, Some("한국")));
        assert!(!is_usd_denominated(None, None));
    }

    #[test]
    fn krw_values_pass_through_unchanged() {
        let rate = ExchangeRate::new(dec!(1400), Utc::now()).unwrap();
        assert_eq!(
            to_reporting_currency(dec!(50000), false, &rate),
            dec!(50000)
        );
        assert_eq!(
            to_reporting_currency(dec!(100), true, &rate),
            dec!(140000)
        );
    }
}
