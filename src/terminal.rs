use crate::{
    command::{self, Command},
    config::TerminalConfig,
    content::{self, ASCII_ART, JOKES, QUOTES},
    host::{Clock, Host, OpenTarget, RandomSource},
    line::{LineKind, LineRecord, Scrollback},
    recall::{Direction, Recall},
};
use tracing::{debug, warn};

const HISTORY_LIMIT: usize = 10;

/// The portfolio's faux shell. One instance per mounted terminal view; all
/// side effects go through the injected `Host`.
pub struct CommandTerminal<H, C, R> {
    config: TerminalConfig,
    scrollback: Scrollback,
    recall: Recall,
    host: H,
    clock: C,
    random: R,
}

impl<H: Host, C: Clock, R: RandomSource> CommandTerminal<H, C, R> {
    pub fn new(config: TerminalConfig, host: H, clock: C, random: R) -> Self {
        let mut term = CommandTerminal {
            config,
            scrollback: Scrollback::new(),
            recall: Recall::new(),
            host,
            clock,
            random,
        };
        let now = term.clock.now_ms();
        for (text, kind) in content::welcome(&term.config.identity) {
            term.scrollback.push(None, text, kind, now);
        }
        term
    }

    /// Runs one line. Blank input is ignored entirely.
    pub fn submit(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        self.recall.record(raw);
        let echo = format!("{} {}", self.config.prompt(), raw);
        self.emit_command(raw, echo);

        let cmd = command::resolve(raw, &self.config.navigation);
        debug!(?cmd, "dispatch");
        match cmd {
            Command::Help => {
                let text = command::help_text(&self.config.navigation);
                self.emit(text, LineKind::Output);
            }
            Command::Clear => self.clear(),
            Command::History => {
                let text = command::history_text(&self.scrollback.recent_commands(HISTORY_LIMIT));
                self.emit(text, LineKind::Output);
            }
            Command::Date => {
                let text = self.clock.format_local(self.clock.now_ms());
                self.emit(text, LineKind::Output);
            }
            Command::Navigate(item) => {
                if let Err(e) = self.host.navigate(&item.route) {
                    warn!(route = %item.route, error = %e, "navigation failed");
                }
                self.emit(item.acknowledgment(), LineKind::Success);
            }
            Command::Github => {
                let url = self.config.identity.github.clone();
                self.open(&url, OpenTarget::Tab, "Opening GitHub profile in new tab...");
            }
            Command::Linkedin => {
                let url = self.config.identity.linkedin.clone();
                self.open(&url, OpenTarget::Tab, "Opening LinkedIn profile in new tab...");
            }
            Command::Email => {
                let url = format!("mailto:{}", self.config.identity.email);
                self.open(&url, OpenTarget::Mail, "Opening email client...");
            }
            Command::Ascii => self.emit(ASCII_ART, LineKind::Output),
            Command::Joke => {
                let text = JOKES[self.random.pick_index(JOKES.len())];
                self.emit(text, LineKind::Output);
            }
            Command::Quote => {
                let text = QUOTES[self.random.pick_index(QUOTES.len())];
                self.emit(text, LineKind::Output);
            }
            Command::Echo(text) => self.emit(text, LineKind::Output),
            Command::Unknown(text) => {
                let msg = command::not_found_text(&text, &self.config.navigation);
                self.emit(msg, LineKind::Error);
            }
        }
    }

    /// Submits whatever is in the edit buffer and empties it.
    pub fn submit_input(&mut self) {
        let line = self.recall.take_input();
        self.submit(&line);
    }

    pub fn recall(&mut self, dir: Direction) {
        self.recall.step(dir);
    }

    pub fn clear(&mut self) {
        self.scrollback.clear();
    }

    pub fn lines(&self) -> &[LineRecord] {
        self.scrollback.lines()
    }

    pub fn input(&self) -> &str {
        self.recall.input()
    }

    pub fn set_input(&mut self, text: &str) {
        self.recall.set_input(text);
    }

    pub fn submitted(&self) -> &[String] {
        self.recall.submitted()
    }

    pub fn recall_index(&self) -> Option<usize> {
        self.recall.cursor()
    }

    pub fn prompt(&self) -> String {
        self.config.prompt()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn emit_command(&mut self, raw: &str, echo: String) {
        let now = self.clock.now_ms();
        self.scrollback
            .push(Some(raw.to_string()), echo, LineKind::Command, now);
    }

    fn emit(&mut self, text: impl Into<String>, kind: LineKind) {
        let now = self.clock.now_ms();
        self.scrollback.push(None, text, kind, now);
    }

    fn open(&mut self, url: &str, target: OpenTarget, ack: &str) {
        if let Err(e) = self.host.open_external(url, target) {
            warn!(url, error = %e, "open external failed");
        }
        self.emit(ack, LineKind::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostError, SeededRandom};

    #[derive(Default)]
    struct RecordingHost {
        routes: Vec<String>,
        opened: Vec<(String, OpenTarget)>,
        fail: bool,
    }

    impl Host for RecordingHost {
        fn navigate(&mut self, route: &str) -> Result<(), HostError> {
            if self.fail {
                return Err(HostError::NoWindow);
            }
            self.routes.push(route.to_string());
            Ok(())
        }
        fn open_external(&mut self, url: &str, target: OpenTarget) -> Result<(), HostError> {
            if self.fail {
                return Err(HostError::PopupBlocked(url.to_string()));
            }
            self.opened.push((url.to_string(), target));
            Ok(())
        }
    }

    struct FixedClock(f64);

    impl Clock for FixedClock {
        fn now_ms(&self) -> f64 {
            self.0
        }
        fn format_local(&self, ms: f64) -> String {
            format!("t={}", ms)
        }
    }

    struct FirstPick;

    impl RandomSource for FirstPick {
        fn pick_index(&mut self, _len: usize) -> usize {
            0
        }
    }

    fn term() -> CommandTerminal<RecordingHost, FixedClock, FirstPick> {
        CommandTerminal::new(
            TerminalConfig::default(),
            RecordingHost::default(),
            FixedClock(1000.0),
            FirstPick,
        )
    }

    fn last(t: &CommandTerminal<RecordingHost, FixedClock, FirstPick>) -> &LineRecord {
        t.lines().last().unwrap()
    }

    #[test]
    fn test_seeded_welcome() {
        let t = term();
        assert_eq!(t.lines().len(), 3);
        assert_eq!(
            t.lines()[0].output,
            "Welcome to Mugni Adji's Portfolio Terminal v2.0"
        );
        assert_eq!(t.lines()[1].kind, LineKind::Info);
        assert!(t.submitted().is_empty());
        assert_eq!(t.recall_index(), None);
    }

    #[test]
    fn test_submit_appends_echo_and_output() {
        for input in ["help", "date", "ascii", "joke", "quote", "whoami", "github", "nope", "echo x"] {
            let mut t = term();
            let before = t.lines().len();
            t.submit(input);
            let added = &t.lines()[before..];
            assert!(added.len() >= 2, "{} added {}", input, added.len());
            assert_eq!(added[0].kind, LineKind::Command);
            assert_eq!(added[0].command.as_deref(), Some(input));
            assert_eq!(added[0].output, format!("mugniadji@portfolio:~$ {}", input));
        }
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut t = term();
        t.submit("");
        t.submit("   ");
        assert_eq!(t.lines().len(), 3);
        assert!(t.submitted().is_empty());
    }

    #[test]
    fn test_clear_empties_scrollback_only() {
        let mut t = term();
        t.submit("help");
        t.recall(Direction::Up);
        t.submit("clear");
        assert!(t.lines().is_empty());
        assert_eq!(t.submitted(), &["help".to_string(), "clear".to_string()]);
        t.clear();
        assert!(t.lines().is_empty());
    }

    #[test]
    fn test_echo_is_verbatim() {
        let mut t = term();
        t.submit("echo hello world");
        assert_eq!(last(&t).kind, LineKind::Output);
        assert_eq!(last(&t).output, "hello world");
        t.submit("echo MiXeD Case");
        assert_eq!(last(&t).output, "MiXeD Case");
    }

    #[test]
    fn test_help_is_case_insensitive() {
        let mut a = term();
        let mut b = term();
        a.submit("HELP");
        b.submit("help");
        assert_eq!(last(&a).output, last(&b).output);
        assert_eq!(last(&a).kind, LineKind::Output);
    }

    #[test]
    fn test_unknown_command() {
        let mut t = term();
        t.submit("frobnicate");
        let line = last(&t);
        assert_eq!(line.kind, LineKind::Error);
        assert!(line.output.contains("frobnicate"));
        assert!(line.output.contains("  • whoami"));
    }

    #[test]
    fn test_navigation_signals_route() {
        let mut t = term();
        t.submit("cat about.md");
        t.submit("Find Certificates/");
        assert_eq!(t.host().routes, vec!["/about", "/certificates"]);
        assert_eq!(last(&t).kind, LineKind::Success);
        assert_eq!(last(&t).output, "Fetching certificates...");
    }

    #[test]
    fn test_external_links() {
        let mut t = term();
        t.submit("github");
        t.submit("linkedin");
        t.submit("email");
        assert_eq!(
            t.host().opened,
            vec![
                ("https://github.com/MiyakoAi".to_string(), OpenTarget::Tab),
                ("https://linkedin.com/in/mugniadji".to_string(), OpenTarget::Tab),
                ("mailto:mugniadji25@gmail.com".to_string(), OpenTarget::Mail),
            ]
        );
        assert_eq!(last(&t).output, "Opening email client...");
    }

    #[test]
    fn test_host_failure_is_swallowed() {
        let mut t = CommandTerminal::new(
            TerminalConfig::default(),
            RecordingHost {
                fail: true,
                ..Default::default()
            },
            FixedClock(0.0),
            FirstPick,
        );
        t.submit("ls projects/");
        assert_eq!(last(&t).output, "Listing projects...");
        t.submit("github");
        assert_eq!(last(&t).kind, LineKind::Success);
        assert!(t.host().routes.is_empty());
    }

    #[test]
    fn test_joke_with_fixed_random() {
        let mut t = term();
        for _ in 0..100 {
            t.submit("joke");
            assert_eq!(last(&t).output, JOKES[0]);
        }
    }

    #[test]
    fn test_quote_with_seeded_random() {
        let mut a = CommandTerminal::new(
            TerminalConfig::default(),
            RecordingHost::default(),
            FixedClock(0.0),
            SeededRandom::new(7),
        );
        let mut b = CommandTerminal::new(
            TerminalConfig::default(),
            RecordingHost::default(),
            FixedClock(0.0),
            SeededRandom::new(7),
        );
        for _ in 0..10 {
            a.submit("quote");
            b.submit("quote");
            assert_eq!(a.lines().last().unwrap().output, b.lines().last().unwrap().output);
            assert!(QUOTES.contains(&a.lines().last().unwrap().output.as_str()));
        }
    }

    #[test]
    fn test_date_uses_clock() {
        let mut t = term();
        t.submit("date");
        assert_eq!(last(&t).output, "t=1000");
        assert_eq!(last(&t).created_at, 1000.0);
    }

    #[test]
    fn test_history_lists_recent_commands() {
        let mut t = term();
        for i in 0..12 {
            t.submit(&format!("echo {}", i));
        }
        t.submit("history");
        let out = &last(&t).output;
        assert!(out.starts_with("Recent commands:\n  1. echo 3\n"));
        assert!(out.ends_with("  10. history"));
    }

    #[test]
    fn test_history_after_clear() {
        let mut t = term();
        t.submit("help");
        t.submit("clear");
        t.submit("History");
        assert_eq!(last(&t).output, "Recent commands:\n  1. History");
    }

    #[test]
    fn test_recall_scenario() {
        let mut t = term();
        t.submit("ls projects/");
        t.submit("help");
        t.recall(Direction::Up);
        t.recall(Direction::Up);
        assert_eq!(t.input(), "ls projects/");
        assert_eq!(t.recall_index(), Some(0));
        t.recall(Direction::Up);
        assert_eq!(t.recall_index(), Some(0));
        assert_eq!(t.input(), "ls projects/");
    }

    #[test]
    fn test_recall_down_from_live_is_noop() {
        let mut t = term();
        t.submit("help");
        t.recall(Direction::Down);
        assert_eq!(t.recall_index(), None);
        assert_eq!(t.input(), "");
    }

    #[test]
    fn test_submit_input_consumes_buffer() {
        let mut t = term();
        t.set_input("  Echo Keep This");
        t.submit_input();
        assert_eq!(t.input(), "");
        assert_eq!(t.submitted(), &["  Echo Keep This".to_string()]);
        assert_eq!(last(&t).output, "Keep This");
    }

    #[test]
    fn test_record_ids_unique_in_order() {
        let mut t = term();
        t.submit("help");
        t.submit("joke");
        let ids: Vec<u64> = t.lines().iter().map(|l| l.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_custom_prompt() {
        let cfg = TerminalConfig::default().with_prompt("guest$");
        let mut t = CommandTerminal::new(cfg, RecordingHost::default(), FixedClock(0.0), FirstPick);
        t.submit("date");
        assert_eq!(t.lines()[3].output, "guest$ date");
    }
}
