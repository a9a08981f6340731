//! Syntax highlighting for board input

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use super::command::COMMANDS;

/// Board input highlighter
pub struct BoardHighlighter {
    command_style: Style,
    unknown_style: Style,
    arg_style: Style,
}

impl BoardHighlighter {
    /// Create new highlighter
    pub fn new() -> Self {
        Self {
            command_style: Style::new().fg(Color::Yellow).bold(),
            unknown_style: Style::new().fg(Color::Red),
            arg_style: Style::new().fg(Color::Cyan),
        }
    }
}

impl Default for BoardHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for BoardHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        let trimmed = line.trim_start();
        let leading = &line[..line.len() - trimmed.len()];
        if !leading.is_empty() {
            styled.push((Style::new(), leading.to_string()));
        }

        let (cmd, rest) = match trimmed.find(char::is_whitespace) {
            Some(i) => trimmed.split_at(i),
            None => (trimmed, ""),
        };

        if !cmd.is_empty() {
            let known = COMMANDS.iter().any(|c| c.name.eq_ignore_ascii_case(cmd));
            let style = if known {
                self.command_style
            } else {
                self.unknown_style
            };
            styled.push((style, cmd.to_string()));
        }

        // Args
        if !rest.is_empty() {
            styled.push((self.arg_style, rest.to_string()));
        }

        styled
    }
}
