use crate::errors::SearchError;
use crate::motion::MotionModel;
use crate::search::{Algorithm, CycleGuard, Searcher};


/// Plain-data description of a search, suitable for loading from a config file
/// `None` fields fall back to the algorithm's defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub directions: u8, // 4 or 8
    pub max_depth: Option<usize>,
    pub cycle_guard: Option<CycleGuard>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AStarGraph,
            directions: 4,
            max_depth: None,
            cycle_guard: None,
        }
    }
}

impl SearchConfig {

    /// Validate the config and turn it into a searcher
    pub fn build(&self) -> Result<Searcher, SearchError> {
        let motion = MotionModel::from_directions(self.directions)?;
        let mut searcher = Searcher::new(self.algorithm, motion);

        if let Some(max_depth) = self.max_depth {
            searcher = searcher.with_max_depth(Some(max_depth));
        }
        if let Some(guard) = self.cycle_guard {
            searcher = searcher.with_cycle_guard(guard);
        }

        Ok(searcher)
    }
}
