//! Lowest-rate-first loan allocation
//!
//! This module turns a catalog of offers into a [`LoanPlan`]. Offers are drawn
//! from cheapest to most expensive until the requested principal is covered.
//!
//! The allocator is responsible for:
//! - Ordering offers by ascending rate (stable, ties keep catalog order)
//! - Capping the last draw so the plan never exceeds the principal
//! - Returning a partial plan when total supply is insufficient

use crate::types::{LoanError, LoanPlan, Offer, Tranche};
use rust_decimal::Decimal;

/// Order offers by ascending rate
///
/// Uses a stable sort, so offers with equal rates keep their catalog order.
pub fn sort_by_rate(offers: &[Offer]) -> Vec<Offer> {
    let mut sorted = offers.to_vec();
    sorted.sort_by(|a, b| a.rate.cmp(&b.rate));
    sorted
}

/// Fill `requested_principal` from the cheapest offers first
///
/// Walks the offers in ascending rate order, drawing
/// `min(available, requested_principal - filled)` from each, and stops as soon
/// as the principal is covered. Offers with nothing available are skipped.
///
/// # Arguments
///
/// * `requested_principal` - Amount the borrower wants; also the fill ceiling
/// * `offers` - Offers in catalog order
///
/// # Returns
///
/// * `Ok(LoanPlan)` with tranches in ascending rate order. Its total is below
///   `requested_principal` only when the offers cannot cover it.
/// * `Err(LoanError::InvalidPrincipal)` if `requested_principal <= 0`
pub fn allocate(requested_principal: Decimal, offers: &[Offer]) -> Result<LoanPlan, LoanError> {
    if requested_principal <= Decimal::ZERO {
        return Err(LoanError::invalid_principal(
            requested_principal,
            "must be greater than zero",
        ));
    }

    let mut filled = Decimal::ZERO;
    let mut tranches = Vec::new();

    for offer in sort_by_rate(offers) {
        if filled >= requested_principal {
            break;
        }

        let drawn = offer.available.min(requested_principal - filled);
        if drawn <= Decimal::ZERO {
            continue;
        }

        tracing::debug!(rate = %offer.rate, amount = %drawn, "drawing tranche");
        tranches.push(Tranche {
            rate: offer.rate,
            amount: drawn,
        });
        filled += drawn;
    }

    Ok(LoanPlan::from_tranches(tranches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn offer(rate: &str, available: i64) -> Offer {
        Offer {
            rate: rate.parse().unwrap(),
            available: Decimal::new(available, 0),
        }
    }

    fn amounts(plan: &LoanPlan) -> Vec<(String, Decimal)> {
        plan.iter()
            .map(|t| (t.rate.to_string(), t.amount))
            .collect()
    }

    fn market() -> Vec<Offer> {
        vec![
            offer("0.075", 640),
            offer("0.069", 480),
            offer("0.071", 520),
            offer("0.104", 170),
            offer("0.081", 320),
            offer("0.074", 140),
            offer("0.071", 60),
        ]
    }

    #[test]
    fn test_sort_by_rate_is_stable() {
        let offers = vec![offer("0.05", 1), offer("0.03", 2), offer("0.05", 3)];
        let sorted = sort_by_rate(&offers);
        let available: Vec<Decimal> = sorted.iter().map(|o| o.available).collect();
        assert_eq!(
            available,
            vec![Decimal::new(2, 0), Decimal::new(1, 0), Decimal::new(3, 0)]
        );
    }

    #[test]
    fn test_allocate_cheapest_first_with_capped_last_draw() {
        let offers = vec![offer("0.05", 500), offer("0.03", 400), offer("0.07", 300)];

        let plan = allocate(Decimal::new(1000, 0), &offers).unwrap();

        assert_eq!(
            amounts(&plan),
            vec![
                ("0.03".to_string(), Decimal::new(400, 0)),
                ("0.05".to_string(), Decimal::new(500, 0)),
                ("0.07".to_string(), Decimal::new(100, 0)),
            ]
        );
        assert_eq!(plan.total_amount(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_allocate_partial_fill_when_supply_insufficient() {
        let offers = vec![offer("0.05", 500), offer("0.03", 300)];

        let plan = allocate(Decimal::new(1000, 0), &offers).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_amount(), Decimal::new(800, 0));
        assert_eq!(plan.shortfall(Decimal::new(1000, 0)), Decimal::new(200, 0));
    }

    #[test]
    fn test_allocate_stops_before_scanning_remaining_offers() {
        let offers = vec![offer("0.01", 1000), offer("0.02", 500)];

        let plan = allocate(Decimal::new(1000, 0), &offers).unwrap();

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.tranches()[0].amount, Decimal::new(1000, 0));
    }

    #[test]
    fn test_allocate_skips_empty_offers() {
        let offers = vec![offer("0.01", 0), offer("0.02", 500)];

        let plan = allocate(Decimal::new(300, 0), &offers).unwrap();

        assert_eq!(amounts(&plan), vec![("0.02".to_string(), Decimal::new(300, 0))]);
    }

    #[test]
    fn test_allocate_ties_keep_catalog_order() {
        let plan = allocate(Decimal::new(1060, 0), &market()).unwrap();

        assert_eq!(
            amounts(&plan),
            vec![
                ("0.069".to_string(), Decimal::new(480, 0)),
                ("0.071".to_string(), Decimal::new(520, 0)),
                ("0.071".to_string(), Decimal::new(60, 0)),
            ]
        );
    }

    // The fill ceiling follows the principal rather than a fixed amount
    #[rstest]
    #[case::below_thousand(500, 2)]
    #[case::thousand(1000, 2)]
    #[case::above_thousand(2300, 7)]
    #[case::whole_market(2330, 7)]
    fn test_allocate_ceiling_tracks_principal(#[case] principal: i64, #[case] tranches: usize) {
        let principal = Decimal::new(principal, 0);

        let plan = allocate(principal, &market()).unwrap();

        assert_eq!(plan.len(), tranches);
        assert_eq!(plan.total_amount(), principal);
    }

    #[rstest]
    #[case::small(100)]
    #[case::medium(1500)]
    #[case::large(15000)]
    fn test_allocate_never_exceeds_principal(#[case] principal: i64) {
        let principal = Decimal::new(principal, 0);
        let offers = market();
        let supply: Decimal = offers.iter().map(|o| o.available).sum();

        let plan = allocate(principal, &offers).unwrap();

        assert!(plan.total_amount() <= principal);
        if supply >= principal {
            assert_eq!(plan.total_amount(), principal);
        } else {
            assert_eq!(plan.total_amount(), supply);
        }
        assert!(plan.iter().all(|t| t.amount > Decimal::ZERO));
        assert!(plan
            .tranches()
            .windows(2)
            .all(|pair| pair[0].rate <= pair[1].rate));
    }

    #[test]
    fn test_allocate_empty_catalog_gives_empty_plan() {
        let plan = allocate(Decimal::new(1000, 0), &[]).unwrap();
        assert!(plan.is_empty());
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-100, 0))]
    fn test_allocate_rejects_non_positive_principal(#[case] principal: Decimal) {
        let result = allocate(principal, &market());
        assert!(matches!(result, Err(LoanError::InvalidPrincipal { .. })));
    }
}
