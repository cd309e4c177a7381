//! Role-alternation filter.
//!
//! Reduces a tagged series to the observations of one weekday pair, arranged
//! so that buys and sells strictly alternate and the run closes on a sell.
//!
//! Tie-breaks within a run of same-role observations:
//! - sells: the earliest one is kept (later sells have nothing to close)
//! - buys: the latest one is kept (it is the buy closest to the next sell)
//!
//! Sells before the first buy are dropped, as is a trailing unmatched buy.

use serde::Serialize;

use crate::domain::{PriceObservation, Role, WeekdayPair};

/// Alternating, sell-terminated subsequence for one pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanSubsequence {
    pair: WeekdayPair,
    observations: Vec<PriceObservation>,
}

/// One buy and the sell that closes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundTrip {
    pub buy: PriceObservation,
    pub sell: PriceObservation,
}

impl RoundTrip {
    /// Sell price over buy price.
    pub fn ratio(&self) -> f64 {
        self.sell.price / self.buy.price
    }
}

impl CleanSubsequence {
    pub fn pair(&self) -> WeekdayPair {
        self.pair
    }

    pub fn observations(&self) -> &[PriceObservation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Consecutive buy → sell couples, in chronological order.
    ///
    /// The filter drops sells before the first buy, so the subsequence
    /// always opens on a buy and splits evenly into couples.
    pub fn round_trips(&self) -> impl Iterator<Item = RoundTrip> + '_ {
        self.observations
            .chunks_exact(2)
            .map(|c| RoundTrip { buy: c[0], sell: c[1] })
    }
}

/// Run the role-alternation filter over `observations` for `pair`.
///
/// Observations on other weekdays are ignored. `observations` must already be
/// in chronological order, which a [`TimeSeries`](crate::domain::TimeSeries)
/// guarantees.
pub fn clean_subsequence(observations: &[PriceObservation], pair: WeekdayPair) -> CleanSubsequence {
    let traded: Vec<(Role, &PriceObservation)> = observations
        .iter()
        .filter_map(|o| pair.role_of(o.weekday).map(|role| (role, o)))
        .collect();

    let mut removed = vec![false; traded.len()];
    let mut expected = Role::Sell;

    for (i, &(role, _)) in traded.iter().enumerate() {
        if role != expected {
            expected = role;
            continue;
        }
        match expected {
            Role::Sell => removed[i] = true,
            // a buy is only expected after one has been seen, so i >= 1
            Role::Buy => {
                if let Some(previous) = i.checked_sub(1) {
                    removed[previous] = true;
                }
            }
        }
    }

    // A buy left open at the end of history cannot be closed.
    if let Some(last) = (0..traded.len()).rev().find(|&i| !removed[i]) {
        if traded[last].0 != Role::Sell {
            removed[last] = true;
        }
    }

    let observations = traded
        .into_iter()
        .zip(removed)
        .filter(|(_, gone)| !gone)
        .map(|((_, obs), _)| *obs)
        .collect();

    CleanSubsequence { pair, observations }
}
