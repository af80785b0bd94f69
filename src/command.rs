use crate::content::{NavCommand, FUN_COMMANDS, LINK_COMMANDS, SYSTEM_COMMANDS};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Clear,
    History,
    Date,
    Navigate(NavCommand),
    Github,
    Linkedin,
    Email,
    Ascii,
    Joke,
    Quote,
    Echo(String),
    Unknown(String),
}

/// Trimmed and lower-cased. Used for matching only, never shown back verbatim.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Maps one submitted line to exactly one command. Never fails: anything
/// unmatched becomes `Command::Unknown`.
pub fn resolve(raw: &str, nav: &[NavCommand]) -> Command {
    let cmd = normalize(raw);
    match cmd.as_str() {
        "help" => return Command::Help,
        "clear" => return Command::Clear,
        "history" => return Command::History,
        "date" => return Command::Date,
        _ => {}
    }
    if let Some(item) = nav.iter().find(|n| n.command == cmd) {
        return Command::Navigate(item.clone());
    }
    match cmd.as_str() {
        "github" => Command::Github,
        "linkedin" => Command::Linkedin,
        "email" => Command::Email,
        "ascii" => Command::Ascii,
        "joke" => Command::Joke,
        "quote" => Command::Quote,
        c if c.starts_with("echo ") => {
            // "echo " is ascii so byte 5 is a char boundary of the raw text too
            let rest = raw.trim_start().get(5..).unwrap_or("");
            Command::Echo(rest.to_string())
        }
        _ => Command::Unknown(cmd),
    }
}

fn section(title: &str, rows: &[(&str, &str)]) -> String {
    let mut out = format!("{}:", title);
    for (cmd, desc) in rows {
        out.push_str(&format!("\n  {:<22} - {}", cmd, desc));
    }
    out
}

pub fn help_text(nav: &[NavCommand]) -> String {
    let mut out = String::from("Available commands:\n\nNavigation:");
    for item in nav {
        out.push_str(&format!("\n  {:<18} - {}", item.command, item.description));
    }
    for (title, rows) in [
        ("System Commands", &SYSTEM_COMMANDS[..]),
        ("External Links", &LINK_COMMANDS[..]),
        ("Fun Commands", &FUN_COMMANDS[..]),
    ] {
        out.push_str("\n\n");
        out.push_str(&section(title, rows));
    }
    out
}

pub fn suggestions(nav: &[NavCommand]) -> Vec<&str> {
    nav.iter().map(|n| n.command.as_str()).collect()
}

pub fn not_found_text(cmd: &str, nav: &[NavCommand]) -> String {
    let list = suggestions(nav)
        .iter()
        .map(|s| format!("  • {}", s))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Command not found: {}\n\nDid you mean one of these?\n{}\n\nType \"help\" for a complete list of available commands.",
        cmd, list
    )
}

pub fn history_text(recent: &[&str]) -> String {
    if recent.is_empty() {
        return "No command history available.".into();
    }
    let rows = recent
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Recent commands:\n{}", rows)
}
