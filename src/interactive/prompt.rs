//! Custom prompt for the board REPL
//!
//! Shows: board[<shapes>] and the selected id on the right

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

use crate::board::Board;

/// Board prompt
#[derive(Debug, Default)]
pub struct BoardPrompt {
    left: String,
    right: String,
}

impl BoardPrompt {
    /// Create new prompt
    pub fn new(board: &Board) -> Self {
        let mut prompt = Self::default();
        prompt.update(board);
        prompt
    }

    /// Update prompt with current board state
    pub fn update(&mut self, board: &Board) {
        self.left = format!("\x1b[33mboard\x1b[0m[\x1b[36m{}\x1b[0m] ", board.len());

        self.right = match board.selected() {
            Some(id) => format!("\x1b[90m[selected #{id}]\x1b[0m"),
            None => String::new(),
        };
    }
}

impl Prompt for BoardPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.left)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.right)
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => Cow::Borrowed("\x1b[32m❯\x1b[0m "),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                reedline::PromptViMode::Normal => Cow::Borrowed("\x1b[33m❮\x1b[0m "),
                reedline::PromptViMode::Insert => Cow::Borrowed("\x1b[32m❯\x1b[0m "),
            },
            PromptEditMode::Custom(_) => Cow::Borrowed("> "),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("\x1b[90m··· \x1b[0m")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        Cow::Owned(format!(
            "\x1b[90m({}search: {})\x1b[0m ",
            prefix, history_search.term
        ))
    }
}
