//! Common types for the search engine: errors and session phases.

/// Errors returned by `SearchState` operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    /// Area grids or starting priors are unusable.
    InvalidConfiguration(&'static str),
    /// Area index (or area count) outside `1..=NUM_AREAS`.
    InvalidArgument { area: usize },
    /// Effectiveness value outside `[0, 1]` or not finite.
    InvalidEffectiveness(f64),
    /// Bayesian normaliser was zero or not finite.
    DegenerateUpdate,
    /// A search was requested before the sailor was placed.
    TargetNotPlaced,
    /// A search or revision was requested before effectiveness was drawn
    /// for the current round.
    EffectivenessNotDrawn,
    /// The session already ended.
    SessionFinished,
}

impl core::fmt::Display for SearchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SearchError::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {}", reason)
            }
            SearchError::InvalidArgument { area } => {
                write!(f, "Area {} is out of range", area)
            }
            SearchError::InvalidEffectiveness(e) => {
                write!(f, "Search effectiveness {} is outside [0, 1]", e)
            }
            SearchError::DegenerateUpdate => {
                write!(f, "Probability revision has a zero or non-finite normaliser")
            }
            SearchError::TargetNotPlaced => write!(f, "Sailor has not been placed yet"),
            SearchError::EffectivenessNotDrawn => {
                write!(f, "Search effectiveness has not been drawn for this round")
            }
            SearchError::SessionFinished => write!(f, "Search session has already ended"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SearchError {}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    Found,
    QuitByUser,
}

/// Where a `SearchState` is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchPhase {
    Initialized,
    TargetPlaced,
    RoundInProgress,
    RoundComplete,
    Terminal(Termination),
}

impl SearchPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchPhase::Terminal(_))
    }
}
