use anyhow::Result;
use colored::*;
use std::io::{self, BufRead, Write};
use tracing::debug;
use trade_evaluator::{TradeSession, TradeSummary};

use crate::commands::{parse_command, Command};
use crate::render;

/// Whether the prompt loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive prompt driving one trade session
pub struct InteractiveCli {
    session: TradeSession,
    json: bool,
}

impl InteractiveCli {
    pub fn new(session: TradeSession, json: bool) -> Self {
        Self { session, json }
    }

    pub fn run(&mut self) -> Result<()> {
        self.show_welcome();

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("{}", format!("trade ({})> ", self.session.mode()).cyan().bold());
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };

            if self.handle_line(&line?)? == Flow::Exit {
                break;
            }
        }

        println!("{}", "👋 Goodbye!".green());
        Ok(())
    }

    /// Apply one line of input to the session
    pub fn handle_line(&mut self, input: &str) -> Result<Flow> {
        let command = match parse_command(input) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(usage) => {
                println!("❌ {usage}");
                return Ok(Flow::Continue);
            }
        };

        debug!("Handling command: {:?}", command);

        match command {
            Command::Mode(mode) => {
                self.session.set_mode(mode);
                println!("✅ League format set to {mode}");
                self.show_summary()?;
            }
            Command::Add(team, label) => {
                if self.session.add(team, &label) {
                    println!("✅ Added {label} to {team}");
                } else {
                    println!("⚠️ Nothing added: '{label}' is unknown or already on {team}");
                }
                self.show_summary()?;
            }
            Command::Remove(team, label) => {
                if self.session.remove(team, &label) {
                    println!("✅ Removed {label} from {team}");
                } else {
                    println!("⚠️ '{label}' is not on {team}");
                }
                self.show_summary()?;
            }
            Command::Clear(team) => {
                self.session.clear(team);
                println!("✅ Cleared {team}");
                self.show_summary()?;
            }
            Command::Summary => self.show_summary()?,
            Command::Search(query) => {
                render::print_assets(&self.session.evaluator().catalog().search(&query));
            }
            Command::List => {
                let assets: Vec<_> = self.session.evaluator().catalog().iter().collect();
                render::print_assets(&assets);
            }
            Command::Help => render::print_help(),
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn show_summary(&self) -> Result<()> {
        print_summary(&self.session.summary(), self.json)
    }

    fn show_welcome(&self) {
        println!("{}", "🏈 Dynasty Trade Analyzer".cyan().bold());
        println!("===================================");
        println!(
            "Catalog loaded with {} assets. League format: {}",
            self.session.evaluator().catalog().len(),
            self.session.mode()
        );
        println!("Type 'help' for available commands.");
        println!();
    }
}

/// Print a summary as colored text or as JSON
pub fn print_summary(summary: &TradeSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", summary.to_json_pretty()?);
    } else {
        render::print_summary(summary);
    }
    Ok(())
}
