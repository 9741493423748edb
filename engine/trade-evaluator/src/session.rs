use crate::evaluator::TradeEvaluator;
use crate::selection::Selection;
use crate::types::{Team, TradeSummary, ValuationMode};
use std::sync::Arc;
use tracing::debug;

/// One user's trade in progress
///
/// A session exclusively owns its two selections and its league format. The
/// evaluator (and with it the catalog) is shared read-only between sessions.
#[derive(Debug, Clone)]
pub struct TradeSession {
    evaluator: Arc<TradeEvaluator>,
    mode: ValuationMode,
    team_a: Selection,
    team_b: Selection,
}

impl TradeSession {
    /// Create a session with empty selections
    pub fn new(evaluator: Arc<TradeEvaluator>, mode: ValuationMode) -> Self {
        Self { evaluator, mode, team_a: Selection::new(), team_b: Selection::new() }
    }

    pub fn evaluator(&self) -> &TradeEvaluator {
        &self.evaluator
    }

    pub fn mode(&self) -> ValuationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ValuationMode) {
        debug!("League format set to {}", mode);
        self.mode = mode;
    }

    pub fn selection(&self, team: Team) -> &Selection {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }

    /// Add an asset to a team; invalid labels are a no-op
    pub fn add(&mut self, team: Team, label: &str) -> bool {
        let (evaluator, selection) = self.parts_mut(team);
        evaluator.add_asset(selection, label)
    }

    /// Remove an asset from a team; absent labels are a no-op
    pub fn remove(&mut self, team: Team, label: &str) -> bool {
        let (evaluator, selection) = self.parts_mut(team);
        evaluator.remove_asset(selection, label)
    }

    pub fn clear(&mut self, team: Team) {
        let (evaluator, selection) = self.parts_mut(team);
        evaluator.clear(selection);
    }

    /// Totals, line items and verdict for the current state of the trade
    pub fn summary(&self) -> TradeSummary {
        self.evaluator.evaluate(&self.team_a, &self.team_b, self.mode)
    }

    fn parts_mut(&mut self, team: Team) -> (&TradeEvaluator, &mut Selection) {
        let selection = match team {
            Team::A => &mut self.team_a,
            Team::B => &mut self.team_b,
        };
        (self.evaluator.as_ref(), selection)
    }
}
