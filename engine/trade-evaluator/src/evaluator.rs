use crate::catalog::{Catalog, CatalogRow};
use crate::config::{EvaluatorConfig, ValuationConfig, DEFAULT_UNEVEN_ADJUSTMENT_PER_ASSET};
use crate::error::{DataError, Result};
use crate::selection::Selection;
use crate::types::{
    round1, LineItem, TeamValuation, TradeSummary, ValuationMode, Verdict, UNEVEN_ADJUSTMENT_LABEL,
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Trade Evaluator - values two selections against the asset catalog
///
/// The evaluator owns the read-only catalog. Selections are owned by the
/// caller and passed in explicitly, so one evaluator can serve any number of
/// independent sessions.
#[derive(Debug, Clone)]
pub struct TradeEvaluator {
    catalog: Catalog,

    /// Value granted per asset of count difference to the smaller side
    uneven_adjustment_per_asset: Decimal,
}

impl TradeEvaluator {
    /// Create an evaluator with the default valuation parameters
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, uneven_adjustment_per_asset: DEFAULT_UNEVEN_ADJUSTMENT_PER_ASSET }
    }

    /// Create an evaluator with explicit valuation parameters
    pub fn with_valuation(catalog: Catalog, valuation: &ValuationConfig) -> Self {
        Self { catalog, uneven_adjustment_per_asset: valuation.uneven_adjustment_per_asset }
    }

    /// Load the catalog named by the configuration and build an evaluator over it
    pub fn from_config(config: &EvaluatorConfig) -> Result<Self> {
        let catalog = Catalog::from_path(&config.data.catalog_path)?;
        Ok(Self::with_valuation(catalog, &config.valuation))
    }

    /// Parse rows into a catalog, deriving display labels
    pub fn load_catalog<I>(rows: I) -> std::result::Result<Catalog, DataError>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        Catalog::load(rows)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn uneven_adjustment_per_asset(&self) -> Decimal {
        self.uneven_adjustment_per_asset
    }

    /// Add a label to a selection
    ///
    /// Empty, unknown and already-selected labels are ignored. Returns whether
    /// the selection changed.
    pub fn add_asset(&self, selection: &mut Selection, label: &str) -> bool {
        if label.is_empty() || !self.catalog.contains(label) {
            debug!("Ignoring add of unknown asset: {:?}", label);
            return false;
        }

        let added = selection.insert(label);
        if added {
            debug!("Added asset to selection: {}", label);
        }
        added
    }

    /// Remove a label from a selection; absent labels are ignored
    pub fn remove_asset(&self, selection: &mut Selection, label: &str) -> bool {
        let removed = selection.remove(label);
        if removed {
            debug!("Removed asset from selection: {}", label);
        }
        removed
    }

    pub fn clear(&self, selection: &mut Selection) {
        selection.clear();
    }

    /// Sum the selected assets' values under the given format
    ///
    /// Line items follow catalog order, not the order labels were selected in.
    /// Catalog values already carry one decimal, so the total is exact and
    /// additive across disjoint selections.
    pub fn compute_total(&self, selection: &Selection, mode: ValuationMode) -> TeamValuation {
        let line_items: Vec<LineItem> = self
            .catalog
            .iter()
            .filter(|asset| selection.contains(&asset.display_label))
            .map(|asset| LineItem::new(asset.display_label.clone(), asset.value(mode)))
            .collect();

        let total: Decimal = line_items.iter().map(|item| item.value).sum();

        TeamValuation { total, asset_count: line_items.len(), line_items }
    }

    /// Compensate the side holding fewer assets
    ///
    /// The smaller side gets one synthetic line item worth the configured
    /// amount per asset of difference. Equal counts are returned unchanged.
    pub fn apply_uneven_adjustment(
        &self,
        mut team_a: TeamValuation,
        mut team_b: TeamValuation,
    ) -> (TeamValuation, TeamValuation) {
        if team_a.asset_count == team_b.asset_count {
            return (team_a, team_b);
        }

        let diff = team_a.asset_count.abs_diff(team_b.asset_count);
        let adjustment = round1(Decimal::from(diff) * self.uneven_adjustment_per_asset);

        let smaller =
            if team_a.asset_count < team_b.asset_count { &mut team_a } else { &mut team_b };
        smaller.line_items.push(LineItem::new(UNEVEN_ADJUSTMENT_LABEL, adjustment));
        smaller.total += adjustment;

        debug!("Applied uneven asset adjustment of {:.1} for {} extra assets", adjustment, diff);
        (team_a, team_b)
    }

    /// Compare the two (post-adjustment) totals
    pub fn compare(team_a_total: Decimal, team_b_total: Decimal) -> Verdict {
        let margin = (team_a_total - team_b_total).abs();

        if team_a_total > team_b_total {
            Verdict::AHeavier { margin }
        } else if team_b_total > team_a_total {
            Verdict::BHeavier { margin }
        } else {
            Verdict::Balanced
        }
    }

    /// Value both sides, apply the uneven adjustment and produce a verdict
    pub fn evaluate(
        &self,
        team_a: &Selection,
        team_b: &Selection,
        mode: ValuationMode,
    ) -> TradeSummary {
        let (team_a, team_b) = self.apply_uneven_adjustment(
            self.compute_total(team_a, mode),
            self.compute_total(team_b, mode),
        );
        let verdict = Self::compare(team_a.total, team_b.total);

        info!(
            "Evaluated trade ({}): Team A {:.1} vs Team B {:.1} - {}",
            mode, team_a.total, team_b.total, verdict
        );

        TradeSummary { mode, team_a, team_b, verdict, evaluated_at: Utc::now() }
    }
}
