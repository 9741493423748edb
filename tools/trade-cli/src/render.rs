//! Terminal rendering of trade summaries and catalog listings

use colored::*;
use trade_evaluator::{Asset, TeamValuation, TradeSummary, Verdict, UNEVEN_ADJUSTMENT_LABEL};

pub fn print_summary(summary: &TradeSummary) {
    println!();
    println!("{}", format!("📊 Trade Summary ({})", summary.mode).cyan().bold());
    println!("===================================");

    print_team("Team A", &summary.team_a);
    print_team("Team B", &summary.team_b);

    println!("---");
    match summary.verdict {
        Verdict::AHeavier { .. } | Verdict::BHeavier { .. } => {
            println!("{}", format!("✅ {}", summary.verdict).green().bold());
        }
        Verdict::Balanced => println!("{}", format!("♻️ {}", summary.verdict).blue().bold()),
    }
    println!();
}

fn print_team(name: &str, valuation: &TeamValuation) {
    println!();
    let total = format!("{:.1}", valuation.total);
    println!("{} {}", format!("{name} Total Value:").bold(), total.yellow());

    if valuation.line_items.is_empty() {
        println!("  (no assets)");
        return;
    }

    for item in &valuation.line_items {
        let line = format!("  {:<55} {:>8.1}", item.label, item.value);
        if item.label == UNEVEN_ADJUSTMENT_LABEL {
            println!("{}", line.magenta());
        } else {
            println!("{line}");
        }
    }
}

pub fn print_assets(assets: &[&Asset]) {
    if assets.is_empty() {
        println!("❌ No matching assets");
        return;
    }

    println!("{:<55} {:>8} {:>8}", "Asset".bold(), "1-QB".bold(), "SF".bold());
    for asset in assets {
        println!(
            "{:<55} {:>8.1} {:>8.1}",
            asset.display_label, asset.value_1qb, asset.value_superflex
        );
    }
    println!();
}

pub fn print_help() {
    println!("{}", "📚 Available Commands:".cyan().bold());
    println!("  mode <1qb|sf>              - Switch league format");
    println!("  add <a|b> <asset label>    - Add an asset to a team");
    println!("  remove <a|b> <asset label> - Remove an asset from a team");
    println!("  clear <a|b>                - Remove every asset from a team");
    println!("  summary                    - Show totals and verdict");
    println!("  search <query>             - Find assets by partial label");
    println!("  list                       - List every asset in the catalog");
    println!("  {}                       - Exit", "exit".green());
    println!();
}
