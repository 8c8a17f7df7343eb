//! Bayesian search state: hidden sailor, per-round effectiveness and the
//! probability revision after each round.

use alloc::vec::Vec;
use log::debug;

use crate::{
    area::AreaBounds,
    common::{SearchError, SearchPhase, Termination},
    config::{
        AreaBias, LocalGrid, PlacementPolicy, SearchConfig, MAX_EFFECTIVENESS, MIN_EFFECTIVENESS,
        NUM_AREAS, PRIOR_EPSILON,
    },
    random::RandomSource,
};

/// Where the sailor actually is. Area indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetLocation {
    pub area: usize,
    /// Cell within the sampling grid, before the area's chart offset.
    pub local: (usize, usize),
}

impl TargetLocation {
    /// Chart coordinates of the sailor: the local cell shifted by the
    /// upper-left corner of the area it was placed in.
    pub fn chart_position(
        &self,
        areas: &[AreaBounds; NUM_AREAS],
    ) -> Result<(usize, usize), SearchError> {
        check_area(self.area)?;
        Ok(areas[self.area - 1].to_chart(self.local))
    }
}

/// Result of searching one area once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub area: usize,
    pub found: bool,
    pub effectiveness: f64,
    /// Distinct local cells inspected this search.
    #[cfg_attr(feature = "std", serde(skip))]
    pub searched_cells: Vec<(usize, usize)>,
}

impl SearchOutcome {
    /// Fraction of the area's cells that were inspected.
    pub fn coverage(&self, bounds: &AreaBounds) -> f64 {
        if bounds.is_empty() {
            return 0.0;
        }
        self.searched_cells.len() as f64 / bounds.cell_count() as f64
    }
}

/// Priors, hidden target and current-round effectiveness for one session.
#[derive(Debug, Clone)]
pub struct SearchState {
    areas: [AreaBounds; NUM_AREAS],
    priors: [f64; NUM_AREAS],
    effectiveness: [f64; NUM_AREAS],
    target: Option<TargetLocation>,
    placement: PlacementPolicy,
    phase: SearchPhase,
}

impl SearchState {
    /// Build a state from area grids and starting priors. Both slices must
    /// hold exactly `NUM_AREAS` entries and the priors must sum to one.
    pub fn new(areas: &[AreaBounds], priors: &[f64]) -> Result<Self, SearchError> {
        if areas.len() != NUM_AREAS {
            return Err(SearchError::InvalidConfiguration("expected three search areas"));
        }
        if priors.len() != NUM_AREAS {
            return Err(SearchError::InvalidConfiguration("expected three prior probabilities"));
        }
        if areas.iter().any(AreaBounds::is_empty) {
            return Err(SearchError::InvalidConfiguration("search area has no cells"));
        }
        if priors
            .iter()
            .any(|p| !p.is_finite() || *p < 0.0 || *p > 1.0)
        {
            return Err(SearchError::InvalidConfiguration(
                "prior probability outside [0, 1]",
            ));
        }
        let total: f64 = priors.iter().sum();
        if libm::fabs(total - 1.0) > PRIOR_EPSILON {
            return Err(SearchError::InvalidConfiguration(
                "prior probabilities do not sum to 1",
            ));
        }

        let areas = core::array::from_fn(|i| areas[i]);
        let priors = core::array::from_fn(|i| priors[i]);
        Ok(Self {
            areas,
            priors,
            effectiveness: [0.0; NUM_AREAS],
            target: None,
            placement: PlacementPolicy::default(),
            phase: SearchPhase::Initialized,
        })
    }

    /// Build a state from a full session configuration.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut state = Self::new(&config.areas, &config.priors)?;
        state.placement = config.placement;
        Ok(state)
    }

    /// Replace the placement policy used by later `place_target` calls.
    pub fn with_placement(mut self, placement: PlacementPolicy) -> Self {
        self.placement = placement;
        self
    }

    pub fn areas(&self) -> &[AreaBounds; NUM_AREAS] {
        &self.areas
    }

    pub fn area(&self, area: usize) -> Result<&AreaBounds, SearchError> {
        check_area(area)?;
        Ok(&self.areas[area - 1])
    }

    pub fn priors(&self) -> [f64; NUM_AREAS] {
        self.priors
    }

    /// Effectiveness values of the latest round, zero before the first draw.
    pub fn effectiveness(&self) -> [f64; NUM_AREAS] {
        self.effectiveness
    }

    pub fn target(&self) -> Option<TargetLocation> {
        self.target
    }

    pub fn placement(&self) -> PlacementPolicy {
        self.placement
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Hide the sailor. The area comes from a triangular draw over
    /// `[1, num_areas + 1]` truncated to an index; the local cell is drawn
    /// uniformly per axis from the grid the placement policy names.
    /// Calling again replaces the previous target.
    ///
    /// With `LocalGrid::FirstArea`, a chosen area smaller than area 1 can
    /// receive a cell outside its own grid. Such a sailor is never found,
    /// even at full effectiveness; full coverage only guarantees a find when
    /// the target's cell lies inside the searched area's grid.
    pub fn place_target<S: RandomSource>(
        &mut self,
        rng: &mut S,
        num_areas: usize,
    ) -> Result<TargetLocation, SearchError> {
        self.ensure_active()?;
        if num_areas == 0 || num_areas > NUM_AREAS {
            return Err(SearchError::InvalidArgument { area: num_areas });
        }

        let low = 1.0;
        let high = (num_areas + 1) as f64;
        let mode = match self.placement.area_bias {
            AreaBias::Upper => high,
            AreaBias::Midpoint => (low + high) / 2.0,
        };
        let draw = rng.triangular(low, high, mode);
        // Truncate, then clamp: the draw may land exactly on `high`.
        let area = (draw as usize).clamp(1, num_areas);

        let grid = match self.placement.local_grid {
            LocalGrid::FirstArea => self.areas[0],
            LocalGrid::ChosenArea => self.areas[area - 1],
        };
        let x = draw_index(rng, grid.width());
        let y = draw_index(rng, grid.height());

        let target = TargetLocation {
            area,
            local: (x, y),
        };
        debug!("sailor placed in area {} at local cell {:?}", area, target.local);
        self.target = Some(target);
        self.phase = SearchPhase::TargetPlaced;
        Ok(target)
    }

    /// Start a round: give every area a fresh uniform effectiveness in
    /// `[MIN_EFFECTIVENESS, MAX_EFFECTIVENESS]`.
    pub fn draw_search_effectiveness<S: RandomSource>(
        &mut self,
        rng: &mut S,
    ) -> Result<[f64; NUM_AREAS], SearchError> {
        self.ensure_active()?;
        if self.target.is_none() {
            return Err(SearchError::TargetNotPlaced);
        }
        for e in self.effectiveness.iter_mut() {
            *e = rng.uniform(MIN_EFFECTIVENESS, MAX_EFFECTIVENESS);
        }
        debug!("search effectiveness drawn: {:?}", self.effectiveness);
        self.phase = SearchPhase::RoundInProgress;
        Ok(self.effectiveness)
    }

    /// Start a round with caller-chosen effectiveness values. Values may be
    /// anywhere in `[0, 1]`, which lets callers exercise full and empty
    /// coverage.
    pub fn set_search_effectiveness(
        &mut self,
        effectiveness: [f64; NUM_AREAS],
    ) -> Result<(), SearchError> {
        self.ensure_active()?;
        if self.target.is_none() {
            return Err(SearchError::TargetNotPlaced);
        }
        if let Some(bad) = effectiveness
            .iter()
            .copied()
            .find(|e| !e.is_finite() || !(0.0..=1.0).contains(e))
        {
            return Err(SearchError::InvalidEffectiveness(bad));
        }
        self.effectiveness = effectiveness;
        self.phase = SearchPhase::RoundInProgress;
        Ok(())
    }

    /// Search one area with this round's effectiveness. Every cell of the
    /// area is shuffled and the first `floor(cells * effectiveness)` are
    /// inspected; the sailor is found only if it is in this area and its
    /// cell was inspected.
    pub fn conduct_search<S: RandomSource>(
        &self,
        rng: &mut S,
        area: usize,
    ) -> Result<SearchOutcome, SearchError> {
        check_area(area)?;
        self.ensure_active()?;
        let target = self.target.ok_or(SearchError::TargetNotPlaced)?;
        if self.phase != SearchPhase::RoundInProgress {
            return Err(SearchError::EffectivenessNotDrawn);
        }

        let bounds = self.areas[area - 1];
        let effectiveness = self.effectiveness[area - 1];
        let mut cells = bounds.cells();
        rng.shuffle(&mut cells);
        let covered = ((cells.len() as f64 * effectiveness) as usize).min(cells.len());
        cells.truncate(covered);

        let found = area == target.area && cells.contains(&target.local);
        debug!(
            "searched area {}: {} of {} cells, found={}",
            area,
            covered,
            bounds.cell_count(),
            found
        );
        Ok(SearchOutcome {
            area,
            found,
            effectiveness,
            searched_cells: cells,
        })
    }

    /// Revise every area's probability given that the sailor was not found:
    /// `p_i' = p_i (1 - e_i) / sum_j p_j (1 - e_j)`. All three areas are
    /// revised with this round's effectiveness whether searched or not.
    pub fn revise_priors(&mut self) -> Result<[f64; NUM_AREAS], SearchError> {
        self.ensure_active()?;
        if self.phase != SearchPhase::RoundInProgress {
            return Err(SearchError::EffectivenessNotDrawn);
        }
        let revised = revise(&self.priors, &self.effectiveness)?;
        debug!("priors revised {:?} -> {:?}", self.priors, revised);
        self.priors = revised;
        self.phase = SearchPhase::RoundComplete;
        Ok(revised)
    }

    /// Close the session. Later round operations fail with
    /// `SearchError::SessionFinished`.
    pub fn conclude(&mut self, reason: Termination) {
        debug!("search session ended: {:?}", reason);
        self.phase = SearchPhase::Terminal(reason);
    }

    fn ensure_active(&self) -> Result<(), SearchError> {
        if self.phase.is_terminal() {
            Err(SearchError::SessionFinished)
        } else {
            Ok(())
        }
    }
}

/// Bayes update for a miss in every area, with likelihood `1 - e_i`.
pub fn revise(
    priors: &[f64; NUM_AREAS],
    effectiveness: &[f64; NUM_AREAS],
) -> Result<[f64; NUM_AREAS], SearchError> {
    let weights: [f64; NUM_AREAS] = core::array::from_fn(|i| priors[i] * (1.0 - effectiveness[i]));
    let denom: f64 = weights.iter().sum();
    if !denom.is_finite() || denom <= 0.0 {
        return Err(SearchError::DegenerateUpdate);
    }
    Ok(core::array::from_fn(|i| weights[i] / denom))
}

fn check_area(area: usize) -> Result<(), SearchError> {
    if (1..=NUM_AREAS).contains(&area) {
        Ok(())
    } else {
        Err(SearchError::InvalidArgument { area })
    }
}

/// Uniform index in `0..len` built from the continuous source.
fn draw_index<S: RandomSource>(rng: &mut S, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let v = rng.uniform(0.0, len as f64) as usize;
    v.min(len - 1)
}
