//! Plain data row types written by output backends.

use toll_sim::TripQuote;

/// One quoted trip, flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow {
    /// Sequence number assigned by the writer, from 0.
    pub trip:         u64,
    pub start:        String,
    pub end:          String,
    pub vehicle:      &'static str,
    pub distance_km:  f64,
    pub rate_per_km:  f64,
    pub total_toll:   f64,
    pub penalty:      f64,
    pub discount:     f64,
    pub final_amount: f64,
}

impl TripRow {
    pub fn from_quote(trip: u64, q: &TripQuote) -> Self {
        Self {
            trip,
            start:        q.request.start.clone(),
            end:          q.request.end.clone(),
            vehicle:      q.request.vehicle.as_str(),
            distance_km:  q.route.total_distance_km,
            rate_per_km:  q.rate_per_km,
            total_toll:   q.toll.total_cost,
            penalty:      q.penalty,
            discount:     q.discount,
            final_amount: q.final_amount,
        }
    }
}

/// One priced zone crossing of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemRow {
    pub trip:        u64,
    pub zone:        String,
    pub distance_km: f64,
    pub cost:        f64,
    pub discounted:  bool,
}

impl LineItemRow {
    /// Rows for every line item of `q`, in crossing order.
    pub fn from_quote(trip: u64, q: &TripQuote) -> Vec<Self> {
        q.toll
            .items
            .iter()
            .zip(&q.discounts)
            .map(|(item, &discounted)| Self {
                trip,
                zone:        item.zone_name.clone(),
                distance_km: item.distance_km,
                cost:        item.cost,
                discounted,
            })
            .collect()
    }
}
