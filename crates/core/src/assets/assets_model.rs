//! Holding domain models.
//!
//! A `Holding` is an immutable snapshot of one asset or loan, handed to the
//! engine per calculation pass. Amounts for CASH / REAL_ESTATE / LOAN are
//! always in won; the 만원 entry convention is normalized at the data-entry
//! boundary via [`man_won_to_won`], never inside the calculators.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAN_WON, REPORTING_CURRENCY};
use crate::errors::{Result, ValidationError};
use crate::fx::currency::{is_usd_denominated, USD};

/// Holding category. Discriminates the valuation rule applied to `amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCategory {
    Cash,
    Pension,
    Stock,
    VirtualAsset,
    RealEstate,
    Loan,
}

impl AssetCategory {
    /// Categories where `amount` is a unit count priced via market quotes.
    pub fn is_investment(&self) -> bool {
        matches!(
            self,
            AssetCategory::Stock | AssetCategory::Pension | AssetCategory::VirtualAsset
        )
    }

    /// Categories routed into total liabilities.
    pub fn is_loan(&self) -> bool {
        matches!(self, AssetCategory::Loan)
    }
}

/// Who a holding belongs to. Only used for filtering upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoldingOwner {
    Primary,
    Partner,
    Shared,
}

/// Loan repayment scheme.
///
/// Serde literals match the stored Korean data contract; English aliases are
/// accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepaymentType {
    /// Interest-only periods, full principal due at maturity.
    #[serde(rename = "만기일시상환", alias = "BULLET")]
    Bullet,
    /// Equal periodic payments blending principal and interest.
    #[serde(rename = "원리금균등분할상환", alias = "AMORTIZING")]
    Amortizing,
}

/// Loan product classification. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    #[serde(rename = "신용대출", alias = "CREDIT")]
    Credit,
    #[serde(rename = "주택담보대출", alias = "MORTGAGE")]
    Mortgage,
    #[serde(rename = "마이너스통장", alias = "OVERDRAFT")]
    Overdraft,
}

/// Category-specific fields. All optional; calculators apply documented
/// fallback chains rather than failing on absent data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingMetadata {
    /// Market symbol for investment holdings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    /// Cost basis per unit for investment holdings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<Decimal>,
    /// Street address for real estate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Cost basis for real estate, in won
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<Decimal>,
    /// Market the holding trades in (e.g. "한국", "미국"). Display and
    /// USD-detection fallback only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_type: Option<LoanType>,
    /// Annual interest rate in percent (4.5 means 4.5%)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repayment_type: Option<RepaymentType>,
    /// Loan term in months
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_period_months: Option<u32>,
    /// Loans flagged here never count toward the DSR ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dsr_excluded: Option<bool>,
}

/// An asset or loan snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    pub owner: HoldingOwner,
    pub category: AssetCategory,
    /// Monetary amount in won (CASH / REAL_ESTATE / LOAN) or unit count
    /// (STOCK / PENSION / VIRTUAL_ASSET)
    pub amount: Decimal,
    /// Explicit ISO currency code when known. Wins over `country` for
    /// USD detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Latest market price per unit, investment categories only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub metadata: HoldingMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Holding {
    /// Creates a holding with a fresh id and current timestamps.
    pub fn new(
        name: impl Into<String>,
        owner: HoldingOwner,
        category: AssetCategory,
        amount: Decimal,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            owner,
            category,
            amount,
            currency: None,
            current_price: None,
            metadata: HoldingMetadata::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks the numeric invariants. Calculators reject invalid holdings
    /// instead of computing nonsense from them.
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "holding '{}': amount must be >= 0, got {}",
                self.name, self.amount
            ))
            .into());
        }
        if let Some(price) = self.current_price {
            if price < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "holding '{}': currentPrice must be >= 0, got {}",
                    self.name, price
                ))
                .into());
            }
        }
        for (field, value) in [
            ("avgPrice", self.metadata.avg_price),
            ("purchasePrice", self.metadata.purchase_price),
            ("interestRate", self.metadata.interest_rate),
        ] {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(ValidationError::InvalidInput(format!(
                        "holding '{}': {} must be >= 0, got {}",
                        self.name, field, v
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Whether the holding is USD-denominated and needs the USD/KRW rate.
    /// Single source of truth for every calculator.
    pub fn is_usd_denominated(&self) -> bool {
        is_usd_denominated(self.currency.as_deref(), self.metadata.country.as_deref())
    }

    /// ISO code of the currency the holding is denominated in.
    pub fn currency_code(&self) -> &str {
        if self.is_usd_denominated() {
            USD
        } else {
            REPORTING_CURRENCY
        }
    }

    /// Price per unit for investment holdings: `currentPrice` when present,
    /// else `avgPrice`, else zero.
    pub fn price_per_unit(&self) -> Decimal {
        self.current_price
            .or(self.metadata.avg_price)
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether this loan counts toward the DSR ratio.
    pub fn is_dsr_excluded(&self) -> bool {
        self.metadata.is_dsr_excluded.unwrap_or(false)
    }
}

/// Converts a 만원-denominated entry amount into won.
///
/// Real estate and loan amounts are entered in units of 10,000 won; this is
/// the only place that convention exists. Everything past the data-entry
/// boundary works in won.
pub fn man_won_to_won(amount: Decimal) -> Decimal {
    amount * MAN_WON
}
