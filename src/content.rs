use crate::line::LineKind;
use serde::{Deserialize, Serialize};

pub const PROMPT_SUFFIX: &str = "@portfolio:~$";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Identity {
    fn default() -> Self {
        Identity {
            name: "Mugni Adji".into(),
            title: "Backend Developer".into(),
            email: "mugniadji25@gmail.com".into(),
            github: "https://github.com/MiyakoAi".into(),
            linkedin: "https://linkedin.com/in/mugniadji".into(),
        }
    }
}

/// Builds the shell-style prompt from the owner's display name.
/// Only the first space is dropped, so "Mugni Adji" becomes `mugniadji@portfolio:~$`.
pub fn prompt_for(name: &str) -> String {
    format!("{}{}", name.to_lowercase().replacen(' ', "", 1), PROMPT_SUFFIX)
}

/// One terminal command that moves the site to another page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavCommand {
    pub command: String,
    pub label: String,
    pub route: String,
    pub description: String,
    #[serde(default)]
    pub acknowledgment: Option<String>,
}

impl NavCommand {
    fn new(command: &str, label: &str, route: &str, description: &str, ack: &str) -> Self {
        NavCommand {
            command: command.into(),
            label: label.into(),
            route: route.into(),
            description: description.into(),
            acknowledgment: Some(ack.into()),
        }
    }

    pub fn acknowledgment(&self) -> String {
        self.acknowledgment
            .clone()
            .unwrap_or_else(|| format!("Opening {}...", self.label.to_lowercase()))
    }
}

pub fn navigation() -> Vec<NavCommand> {
    vec![
        NavCommand::new(
            "whoami",
            "Home",
            "/",
            "About me and terminal interface",
            "Navigating to home page...",
        ),
        NavCommand::new(
            "cat about.md",
            "About",
            "/about",
            "My background and experience",
            "Loading about page...",
        ),
        NavCommand::new(
            "ls projects/",
            "Projects",
            "/projects",
            "Portfolio of my work",
            "Listing projects...",
        ),
        NavCommand::new(
            "which skills",
            "Skills",
            "/skills",
            "Technical expertise",
            "Displaying skills matrix...",
        ),
        NavCommand::new(
            "find certificates/",
            "Certificates",
            "/certificates",
            "Professional certifications",
            "Fetching certificates...",
        ),
        NavCommand::new(
            "curl contact.json",
            "Contact",
            "/contact",
            "Get in touch with me",
            "Fetching contact information...",
        ),
    ]
}

pub fn welcome(identity: &Identity) -> Vec<(String, LineKind)> {
    vec![
        (
            format!("Welcome to {}'s Portfolio Terminal v2.0", identity.name),
            LineKind::Success,
        ),
        (
            "System initialized successfully. Type \"help\" to see available commands.".into(),
            LineKind::Info,
        ),
        ("---".into(), LineKind::Output),
    ]
}

pub const JOKES: [&str; 4] = [
    "Why do programmers prefer dark mode?\nBecause light attracts bugs!",
    "How many programmers does it take to change a light bulb?\nNone. That's a hardware problem!",
    "Why do Java developers wear glasses?\nBecause they can't C#",
    "There are only 10 types of people in the world:\nthose who understand binary and those who don't!",
];

pub const QUOTES: [&str; 4] = [
    "\"Code is like humor. When you have to explain it, it's bad.\" - Cory House",
    "\"First, solve the problem. Then, write the code.\" - John Johnson",
    "\"The best error message is the one that never shows up.\" - Thomas Fuchs",
    "\"Experience is the name everyone gives to their mistakes.\" - Oscar Wilde",
];

pub const ASCII_ART: &str = "
              ╔═════════════════════════════════════╗
              ║             I am Gonna..            ║
              ║                                     ║
              ║     Hatsune Miku is My Wife         ║
              ║     Hatsune Miku is Beautifull      ║
              ║     Hatsune Miku is My Motivasion   ║
              ║                                     ║
              ║   \"Tolong jangan claim istri saya!\" ║
              ╚═════════════════════════════════════╝";

/// Entries of the help listing that are not navigation targets, grouped by section.
pub const SYSTEM_COMMANDS: [(&str, &str); 4] = [
    ("clear", "Clear terminal screen"),
    ("history", "Show command history"),
    ("date", "Show current date and time"),
    ("echo <message>", "Print message to screen"),
];

pub const LINK_COMMANDS: [(&str, &str); 3] = [
    ("github", "Open GitHub profile"),
    ("linkedin", "Open LinkedIn profile"),
    ("email", "Open email client"),
];

pub const FUN_COMMANDS: [(&str, &str); 3] = [
    ("ascii", "Show ASCII art"),
    ("joke", "Get a programming joke"),
    ("quote", "Get an inspirational quote"),
];
