//! Session command parsing for the interactive prompt

use trade_evaluator::{Team, ValuationMode};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Mode(ValuationMode),
    Add(Team, String),
    Remove(Team, String),
    Clear(Team),
    Summary,
    Search(String),
    List,
    Help,
    Exit,
}

/// Parse one line of input
///
/// Returns `Ok(None)` for blank lines and `Err` with a usage message for
/// anything that can't be understood. Labels keep their inner spacing.
pub fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "mode" | "format" => {
            if rest.is_empty() {
                return Err("Usage: mode <1qb|sf>".to_string());
            }
            Command::Mode(rest.parse()?)
        }
        "add" => {
            let (team, label) = team_and_label(rest, "add")?;
            Command::Add(team, label)
        }
        "remove" | "rm" => {
            let (team, label) = team_and_label(rest, "remove")?;
            Command::Remove(team, label)
        }
        "clear" => {
            if rest.is_empty() {
                return Err("Usage: clear <a|b>".to_string());
            }
            Command::Clear(rest.parse()?)
        }
        "summary" | "show" => Command::Summary,
        "search" | "find" => {
            if rest.is_empty() {
                return Err("Usage: search <query>".to_string());
            }
            Command::Search(rest.to_string())
        }
        "list" | "ls" => Command::List,
        "help" | "?" => Command::Help,
        "exit" | "quit" => Command::Exit,
        other => {
            return Err(format!("Unknown command '{other}'. Type 'help' for available commands."))
        }
    };

    Ok(Some(command))
}

fn team_and_label(rest: &str, verb: &str) -> Result<(Team, String), String> {
    let usage = || format!("Usage: {verb} <a|b> <asset label>");

    let (team, label) = rest.split_once(char::is_whitespace).ok_or_else(usage)?;
    let label = label.trim();
    if label.is_empty() {
        return Err(usage());
    }

    Ok((team.parse()?, label.to_string()))
}
