//! Trade Evaluator - dynasty fantasy football trade values
//!
//! Loads a precomputed per-asset value table, lets a caller assemble two
//! sides of a trade, and reports each side's total along with which side is
//! giving up more value. Sides holding fewer assets receive a flat
//! per-asset adjustment before the comparison.

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod selection;
pub mod session;
pub mod types;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, CatalogRow};
pub use config::EvaluatorConfig;
pub use error::{DataError, EvaluatorError, Result};
pub use rust_decimal::Decimal;
pub use evaluator::TradeEvaluator;
pub use selection::Selection;
pub use session::TradeSession;
pub use types::{
    Asset, AssetKind, LineItem, Team, TeamValuation, TradeSummary, ValuationMode, Verdict,
    UNEVEN_ADJUSTMENT_LABEL,
};
