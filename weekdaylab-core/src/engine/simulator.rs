//! Compounding trade simulator.

use crate::domain::{DayOfWeek, PriceObservation};

use super::alternation::CleanSubsequence;
use super::INITIAL_CAPITAL;

/// Final capital after trading `clean` from [`INITIAL_CAPITAL`].
pub fn simulate(clean: &CleanSubsequence) -> f64 {
    compound(clean.observations(), clean.pair().buy(), INITIAL_CAPITAL)
}

/// Walk `observations` in order: a buy-day observation converts cash into
/// units (`capital / price`), any other converts units back into cash
/// (`capital * price`).
///
/// No fees, slippage or rounding are applied. The arithmetic order is fixed,
/// so identical inputs give bit-identical output.
pub fn compound(observations: &[PriceObservation], buy: DayOfWeek, initial_capital: f64) -> f64 {
    observations.iter().fold(initial_capital, |capital, obs| {
        if obs.weekday == buy {
            capital / obs.price
        } else {
            capital * obs.price
        }
    })
}

/// Relative change of `final_capital` over [`INITIAL_CAPITAL`], in percent.
pub fn profit_percent(final_capital: f64) -> f64 {
    (final_capital - INITIAL_CAPITAL) / INITIAL_CAPITAL * 100.0
}
