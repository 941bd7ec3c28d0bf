//! Owner and view filters shared by stats and history.

use serde::{Deserialize, Serialize};

use crate::assets::{AssetCategory, Holding, HoldingOwner};

/// Restricts holdings to one household member, or includes everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OwnerFilter {
    #[default]
    Total,
    Owner(HoldingOwner),
}

impl OwnerFilter {
    pub fn matches(&self, owner: HoldingOwner) -> bool {
        match self {
            OwnerFilter::Total => true,
            OwnerFilter::Owner(selected) => *selected == owner,
        }
    }
}

/// Dashboard page views. Each non-dashboard view narrows to the categories
/// it renders; real estate keeps loans alongside so the page can show the
/// mortgage next to the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewFilter {
    #[default]
    Dashboard,
    RealEstate,
    Pension,
    Crypto,
    Stock,
}

impl ViewFilter {
    pub fn matches(&self, category: AssetCategory) -> bool {
        match self {
            ViewFilter::Dashboard => true,
            ViewFilter::RealEstate => matches!(
                category,
                AssetCategory::RealEstate | AssetCategory::Loan
            ),
            ViewFilter::Pension => category == AssetCategory::Pension,
            ViewFilter::Crypto => category == AssetCategory::VirtualAsset,
            ViewFilter::Stock => category == AssetCategory::Stock,
        }
    }
}

/// Applies both filters, preserving input order.
pub fn filter_holdings<'a>(
    holdings: &'a [Holding],
    owner: OwnerFilter,
    view: ViewFilter,
) -> Vec<&'a Holding> {
    holdings
        .iter()
        .filter(|h| owner.matches(h.owner) && view.matches(h.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(owner: HoldingOwner, category: AssetCategory) -> Holding {
        Holding::new("테스트", owner, category, dec!(100))
    }

    #[test]
    fn total_matches_every_owner() {
        for owner in [
            HoldingOwner::Primary,
            HoldingOwner::Partner,
            HoldingOwner::Shared,
        ] {
            assert!(OwnerFilter::Total.matches(owner));
        }
        assert!(!OwnerFilter::Owner(HoldingOwner::Primary).matches(HoldingOwner::Partner));
    }

    #[test]
    fn real_estate_view_keeps_loans() {
        assert!(ViewFilter::RealEstate.matches(AssetCategory::RealEstate));
        assert!(ViewFilter::RealEstate.matches(AssetCategory::Loan));
        assert!(!ViewFilter::RealEstate.matches(AssetCategory::Stock));
    }

    #[test]
    fn filter_combines_owner_and_view() {
        let holdings = vec![
            holding(HoldingOwner::Primary, AssetCategory::Stock),
            holding(HoldingOwner::Partner, AssetCategory::Stock),
            holding(HoldingOwner::Primary, AssetCategory::Cash),
        ];
        let filtered = filter_holdings(
            &holdings,
            OwnerFilter::Owner(HoldingOwner::Primary),
            ViewFilter::Stock,
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].owner, HoldingOwner::Primary);
    }
}
