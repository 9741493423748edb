use std::path::PathBuf;
use trade_evaluator::{Catalog, EvaluatorConfig, ValuationMode};
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Usage: inspect-catalog [catalog.csv] [search query]
    let mut args = std::env::args().skip(1);
    let catalog_path = match args.next() {
        Some(path) => PathBuf::from(path),
        None => EvaluatorConfig::from_env()?.data.catalog_path,
    };
    let query = args.next();

    let catalog = Catalog::from_path(&catalog_path)?;
    info!("Catalog loaded with {} assets", catalog.len());

    for mode in [ValuationMode::SingleQB, ValuationMode::Superflex] {
        println!("\nTop 10 Assets ({mode}):");
        println!("Rank Asset                                              Value");
        println!("------------------------------------------------------------------");

        for (i, asset) in catalog.top_assets(mode, 10).iter().enumerate() {
            println!("{:4} {:50} {:8.1}", i + 1, asset.display_label, asset.value(mode));
        }
    }

    if let Some(query) = query {
        println!("\nSearching for '{query}':");
        for asset in catalog.search(&query) {
            println!(
                "  {} - 1-QB {:.1} / SF {:.1}",
                asset.display_label, asset.value_1qb, asset.value_superflex
            );
        }
    }

    Ok(())
}
