use crate::error::DataError;
use crate::types::{Asset, AssetKind, ValuationMode};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const NAME_COLUMN: &str = "Name";
const VALUE_1QB_COLUMN: &str = "Trade Value";
const VALUE_SF_COLUMN: &str = "SF Trade Value";

/// One raw row of the value table, as produced by the data-preparation step
///
/// Every field is optional at this stage so that a missing column is reported
/// as a `DataError` naming the row and column instead of a generic CSV error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogRow {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,

    #[serde(rename = "POS", default)]
    pub position: Option<String>,

    #[serde(rename = "Team", default)]
    pub team: Option<String>,

    #[serde(rename = "Age", default)]
    pub age: Option<String>,

    #[serde(rename = "Trade Value", default)]
    pub value_1qb: Option<String>,

    #[serde(rename = "SF Trade Value", default)]
    pub value_superflex: Option<String>,
}

/// Asset Catalog - the immutable value table for a session
///
/// Assets keep the order of the source rows; every lookup goes through the
/// display label, which is unique across the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Assets in source order
    assets: Vec<Asset>,

    /// Map from display label to position in `assets`
    index_by_label: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from typed rows
    ///
    /// Any malformed row aborts the whole load.
    pub fn load<I>(rows: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = CatalogRow>,
    {
        let mut assets = Vec::new();
        let mut index_by_label = HashMap::new();

        for (i, row) in rows.into_iter().enumerate() {
            let asset = parse_row(i + 1, row)?;

            if index_by_label.contains_key(&asset.display_label) {
                return Err(DataError::DuplicateLabel { label: asset.display_label });
            }

            index_by_label.insert(asset.display_label.clone(), assets.len());
            assets.push(asset);
        }

        let catalog = Self { assets, index_by_label };
        info!(
            "Loaded catalog with {} assets ({} players, {} picks)",
            catalog.len(),
            catalog.count_kind(AssetKind::Player),
            catalog.count_kind(AssetKind::DraftPick)
        );
        Ok(catalog)
    }

    /// Load a catalog from CSV text with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let rows = csv_reader
            .deserialize::<CatalogRow>()
            .collect::<Result<Vec<_>, csv::Error>>()?;

        debug!("Read {} catalog rows", rows.len());
        Self::load(rows)
    }

    /// Load a catalog from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        info!("Loading asset catalog from: {:?}", path);

        let file = std::fs::File::open(path)
            .map_err(|source| DataError::Io { path: path.display().to_string(), source })?;

        Self::from_reader(file)
    }

    /// Get an asset by display label
    pub fn get(&self, label: &str) -> Option<&Asset> {
        self.index_by_label.get(label).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index_by_label.contains_key(label)
    }

    /// All assets in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// All display labels in catalog order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.assets.iter().map(|asset| asset.display_label.as_str())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Search for assets by case-insensitive partial label match
    pub fn search(&self, query: &str) -> Vec<&Asset> {
        let query_lower = query.trim().to_lowercase();
        self.assets
            .iter()
            .filter(|asset| asset.display_label.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Get the top N assets by value under the given format
    pub fn top_assets(&self, mode: ValuationMode, limit: usize) -> Vec<&Asset> {
        let mut assets: Vec<&Asset> = self.assets.iter().collect();
        assets.sort_by(|a, b| b.value(mode).cmp(&a.value(mode)));
        assets.truncate(limit);
        assets
    }

    fn count_kind(&self, kind: AssetKind) -> usize {
        self.assets.iter().filter(|asset| asset.kind() == kind).count()
    }
}

/// Turn one raw row into an asset, validating required columns and values
fn parse_row(row: usize, raw: CatalogRow) -> Result<Asset, DataError> {
    let name =
        non_empty(raw.name).ok_or(DataError::MissingColumn { row, column: NAME_COLUMN })?;

    let value_1qb = parse_value(row, VALUE_1QB_COLUMN, raw.value_1qb)?;
    let value_superflex = parse_value(row, VALUE_SF_COLUMN, raw.value_superflex)?;

    // Age only feeds the label; anything unreadable is shown as N/A
    let age = non_empty(raw.age).and_then(|age| match age.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!("Row {}: treating unreadable age {:?} as absent", row, age);
            None
        }
    });

    Ok(Asset::new(
        name,
        non_empty(raw.team),
        non_empty(raw.position),
        age,
        value_1qb,
        value_superflex,
    ))
}

/// Parse a required, non-negative decimal value
fn parse_value(
    row: usize,
    column: &'static str,
    raw: Option<String>,
) -> Result<Decimal, DataError> {
    let raw = non_empty(raw).ok_or(DataError::MissingColumn { row, column })?;

    let parsed = raw.parse::<Decimal>().or_else(|_| Decimal::from_scientific(&raw));
    match parsed {
        Ok(value) if value >= Decimal::ZERO => Ok(value),
        _ => Err(DataError::InvalidValue { row, column, value: raw }),
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
