//! Toll aggregation.

use toll_zones::ZoneCrossing;

use crate::MultiplierTable;

/// One priced crossing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TollLineItem {
    pub zone_name: String,
    pub distance_km: f64,
    pub cost: f64,
}

/// Total toll plus the per-zone breakdown, in crossing order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TollBreakdown {
    pub total_cost: f64,
    pub items: Vec<TollLineItem>,
}

impl TollBreakdown {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Price every crossing at `rate_per_km × distance_km × multiplier`.
///
/// `rate_per_km` is not validated: zero yields a free trip, a negative rate
/// yields negative (refund-like) costs.
pub fn compute_toll(
    multipliers: &MultiplierTable,
    crossings: &[ZoneCrossing],
    rate_per_km: f64,
) -> TollBreakdown {
    let mut total_cost = 0.0;
    let items = crossings
        .iter()
        .map(|c| {
            let cost = rate_per_km * c.distance_km * multipliers.factor(&c.zone_name);
            total_cost += cost;
            TollLineItem {
                zone_name: c.zone_name.clone(),
                distance_km: c.distance_km,
                cost,
            }
        })
        .collect();

    TollBreakdown { total_cost, items }
}
