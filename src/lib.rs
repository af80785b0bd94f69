pub mod command;
pub mod config;
pub mod contact;
pub mod content;
pub mod host;
pub mod line;
pub mod recall;
pub mod terminal;
pub mod web;

pub use config::TerminalConfig;
pub use terminal::CommandTerminal;
pub use web::Portfolio;
