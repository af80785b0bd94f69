use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Command,
    Output,
    Error,
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRecord {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub output: String,
    pub kind: LineKind,
    pub created_at: f64, // epoch ms
}

/// Append-only list of displayed lines. `clear` empties it but ids keep counting.
pub struct Scrollback {
    next_id: u64,
    lines: Vec<LineRecord>,
}

impl Default for Scrollback {
    fn default() -> Self {
        Self::new()
    }
}

impl Scrollback {
    pub fn new() -> Self {
        Scrollback {
            next_id: 1,
            lines: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        command: Option<String>,
        output: impl Into<String>,
        kind: LineKind,
        created_at: f64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.lines.push(LineRecord {
            id,
            command,
            output: output.into(),
            kind,
            created_at,
        });
        id
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Echoed command text of the most recent `limit` command lines, oldest first.
    pub fn recent_commands(&self, limit: usize) -> Vec<&str> {
        let commands: Vec<&str> = self
            .lines
            .iter()
            .filter_map(|l| l.command.as_deref())
            .collect();
        let skip = commands.len().saturating_sub(limit);
        commands.into_iter().skip(skip).collect()
    }
}
