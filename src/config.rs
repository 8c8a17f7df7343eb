use crate::area::AreaBounds;

/// Number of search areas on the chart.
pub const NUM_AREAS: usize = 3;

/// Search area rectangles on the reference chart, as (UL-X, UL-Y, LR-X, LR-Y).
pub const SEARCH_AREAS: [AreaBounds; NUM_AREAS] = [
    AreaBounds::new(130, 265, 180, 315),
    AreaBounds::new(80, 255, 130, 305),
    AreaBounds::new(105, 205, 155, 255),
];

/// Starting belief that the sailor is in each area.
pub const DEFAULT_PRIORS: [f64; NUM_AREAS] = [0.2, 0.5, 0.3];

/// Lowest search effectiveness a round can draw.
pub const MIN_EFFECTIVENESS: f64 = 0.2;
/// Highest search effectiveness a round can draw.
pub const MAX_EFFECTIVENESS: f64 = 0.9;

/// Tolerance when checking that starting priors sum to one.
pub const PRIOR_EPSILON: f64 = 1e-6;

/// Where the triangular area draw puts its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaBias {
    /// Mode at `num_areas + 1`: strongly favours the highest-numbered area.
    #[default]
    Upper,
    /// Mode halfway between the bounds.
    Midpoint,
}

/// Which grid bounds the sailor's local cell is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum LocalGrid {
    /// Always area 1's width and height, whatever area was chosen.
    #[default]
    FirstArea,
    /// The chosen area's own width and height.
    ChosenArea,
}

/// How `SearchState::place_target` hides the sailor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementPolicy {
    pub area_bias: AreaBias,
    pub local_grid: LocalGrid,
}

/// Everything needed to start a search session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub areas: [AreaBounds; NUM_AREAS],
    pub priors: [f64; NUM_AREAS],
    pub placement: PlacementPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            areas: SEARCH_AREAS,
            priors: DEFAULT_PRIORS,
            placement: PlacementPolicy::default(),
        }
    }
}
