#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Direction> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Every submitted line plus a shell-style cursor over them.
/// `cursor == None` means the user is editing a fresh line.
#[derive(Debug, Default)]
pub struct Recall {
    submitted: Vec<String>,
    cursor: Option<usize>,
    input: String,
}

impl Recall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, raw: &str) {
        self.submitted.push(raw.to_string());
        self.cursor = None;
    }

    pub fn step(&mut self, dir: Direction) {
        if self.submitted.is_empty() {
            return;
        }
        let last = self.submitted.len() - 1;
        self.cursor = match (dir, self.cursor) {
            (Direction::Up, None) => Some(last),
            (Direction::Up, Some(i)) => Some(i.saturating_sub(1)),
            (Direction::Down, None) => return,
            (Direction::Down, Some(i)) if i >= last => None,
            (Direction::Down, Some(i)) => Some(i + 1),
        };
        self.input = match self.cursor {
            Some(i) => self.submitted[i].clone(),
            None => String::new(),
        };
    }

    pub fn submitted(&self) -> &[String] {
        &self.submitted
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn take_input(&mut self) -> String {
        std::mem::take(&mut self.input)
    }
}
