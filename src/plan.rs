// Which areas a round searches, and the round driver that runs one.

use alloc::vec::Vec;
use log::debug;

use crate::{
    common::{SearchError, Termination},
    config::NUM_AREAS,
    random::RandomSource,
    search::{SearchOutcome, SearchState},
};

/// The searches carried out in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchPlan {
    /// Search one area two times.
    Twice(usize),
    /// Search two different areas once each.
    Pair(usize, usize),
}

impl SearchPlan {
    /// Area indices searched, in order.
    pub fn areas(&self) -> [usize; 2] {
        match *self {
            SearchPlan::Twice(a) => [a, a],
            SearchPlan::Pair(a, b) => [a, b],
        }
    }

    /// Recommend a plan from the current priors: the most likely area twice
    /// when it holds at least double the runner-up's probability, otherwise
    /// the two most likely areas. Ties go to the lower index.
    pub fn suggest(priors: &[f64; NUM_AREAS]) -> Self {
        let mut order: [usize; NUM_AREAS] = core::array::from_fn(|i| i);
        order.sort_unstable_by(|&a, &b| priors[b].total_cmp(&priors[a]).then(a.cmp(&b)));
        let (best, second) = (order[0], order[1]);
        if priors[best] >= 2.0 * priors[second] {
            SearchPlan::Twice(best + 1)
        } else {
            let (lo, hi) = if best < second { (best, second) } else { (second, best) };
            SearchPlan::Pair(lo + 1, hi + 1)
        }
    }
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub plan: SearchPlan,
    pub effectiveness: [f64; NUM_AREAS],
    pub outcomes: Vec<SearchOutcome>,
    pub revised_priors: [f64; NUM_AREAS],
    /// Area the sailor was found in, if any search succeeded.
    pub found_in: Option<usize>,
}

/// Run one full round: draw effectiveness, carry out each search in the
/// plan, revise the priors, and end the session if the sailor turned up.
pub fn play_round<S: RandomSource>(
    state: &mut SearchState,
    rng: &mut S,
    plan: SearchPlan,
) -> Result<RoundReport, SearchError> {
    for area in plan.areas() {
        state.area(area)?;
    }
    let effectiveness = state.draw_search_effectiveness(rng)?;
    let mut outcomes = Vec::with_capacity(2);
    for area in plan.areas() {
        outcomes.push(state.conduct_search(rng, area)?);
    }
    let revised_priors = state.revise_priors()?;
    let found_in = outcomes.iter().find(|o| o.found).map(|o| o.area);
    if found_in.is_some() {
        state.conclude(Termination::Found);
    }
    debug!("round {:?} finished, found_in={:?}", plan, found_in);
    Ok(RoundReport {
        plan,
        effectiveness,
        outcomes,
        revised_priors,
        found_in,
    })
}
