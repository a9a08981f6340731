//! Autocompletion for board commands

use reedline::{Completer, Span, Suggestion};

use super::command::{COLORS, COMMANDS, FILL_MODES};
use crate::canvas::ShapeKind;

/// Completes the command word, then the `add` arguments
#[derive(Debug, Default)]
pub struct BoardCompleter;

impl BoardCompleter {
    /// Create new completer
    pub fn new() -> Self {
        Self
    }

    /// Candidates for the token following `previous`
    fn candidates(previous: &[&str]) -> Vec<(&'static str, Option<&'static str>)> {
        match previous {
            [] => COMMANDS
                .iter()
                .map(|cmd| (cmd.name, Some(cmd.description)))
                .collect(),
            [add] if add.eq_ignore_ascii_case("add") => ShapeKind::ALL
                .iter()
                .map(|kind| (kind.keyword(), Some(kind.description())))
                .collect(),
            [add, _] if add.eq_ignore_ascii_case("add") => {
                FILL_MODES.iter().map(|mode| (*mode, None)).collect()
            }
            [add, _, _] if add.eq_ignore_ascii_case("add") => {
                COLORS.iter().map(|color| (*color, None)).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl Completer for BoardCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_pos = &line[..pos];

        // Find word being completed
        let word_start = line_to_pos
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);

        let partial = line_to_pos[word_start..].to_lowercase();
        let previous: Vec<&str> = line_to_pos[..word_start].split_whitespace().collect();

        Self::candidates(&previous)
            .into_iter()
            .filter(|(value, _)| value.starts_with(partial.as_str()))
            .map(|(value, description)| Suggestion {
                value: value.to_string(),
                description: description.map(str::to_string),
                style: None,
                extra: None,
                span: Span::new(word_start, pos),
                append_whitespace: true,
            })
            .collect()
    }
}
