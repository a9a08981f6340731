//! Interactive REPL Module
//!
//! Line-oriented command interpreter for the board:
//! - Prompt showing shape count and selection
//! - Autocompletion for commands and `add` arguments
//! - Command highlighting
//! - Optional file-backed history
//!
//! When stdin is not a terminal the same [`Session`] is driven line by line
//! from the input stream instead, see [`run_script`].

mod command;
mod completer;
mod highlighter;
mod prompt;
mod session;

use std::fs;
use std::io::{BufRead, Write};

use reedline::{
    default_emacs_keybindings, ColumnarMenu, EditMode, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
use tracing::{debug, warn};

use crate::config::BoardConfig;
use crate::errors::{BoardError, Result};

pub use self::command::{validate_bounds, Command, CommandHelp, COLORS, COMMANDS, FILL_MODES};
pub use self::completer::BoardCompleter;
pub use self::highlighter::BoardHighlighter;
pub use self::prompt::BoardPrompt;
pub use self::session::{help_text, shapes_catalog, Reply, Session};

const MENU_NAME: &str = "completion_menu";

/// Interactive REPL
pub struct Interactive {
    session: Session,
    editor: Reedline,
    prompt: BoardPrompt,
}

impl Interactive {
    /// Create new interactive REPL
    pub fn new(session: Session, config: &BoardConfig) -> Self {
        let editor = Self::create_editor(config);
        let prompt = BoardPrompt::new(session.board());

        Self {
            session,
            editor,
            prompt,
        }
    }

    /// Run the interactive REPL until `exit` or Ctrl+D
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            self.prompt.update(self.session.board());

            match self.editor.read_line(&self.prompt) {
                Ok(Signal::Success(line)) => match self.session.execute(&line) {
                    Ok(Reply::Text(text)) => println!("{text}\n"),
                    Ok(Reply::Silent) => {}
                    Ok(Reply::Exit) => break,
                    Err(e) => {
                        debug!("Command failed: {e}");
                        eprintln!("\x1b[31m✗ {e}\x1b[0m\n");
                    }
                },
                Ok(Signal::CtrlC) => {
                    println!("\x1b[90m(Press Ctrl+D or type exit to quit)\x1b[0m\n");
                }
                Ok(Signal::CtrlD) => break,
                Err(e) => {
                    eprintln!("\x1b[31m✗ Input error: {e}\x1b[0m\n");
                    return Err(BoardError::Io(e));
                }
            }
        }

        println!("\x1b[90mBye.\x1b[0m");
        Ok(())
    }

    fn create_editor(config: &BoardConfig) -> Reedline {
        let completer = BoardCompleter::new();
        let highlighter = BoardHighlighter::new();

        let editor = Reedline::create()
            .with_completer(Box::new(completer))
            .with_highlighter(Box::new(highlighter))
            .with_menu(Self::create_menu())
            .with_edit_mode(Self::create_edit_mode())
            .with_quick_completions(true)
            .with_partial_completions(true)
            .with_ansi_colors(true);

        match &config.history_file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        warn!("Could not create history dir {}: {e}", parent.display());
                    }
                }
                match FileBackedHistory::with_file(config.history_size, path.clone()) {
                    Ok(history) => editor.with_history(Box::new(history)),
                    Err(e) => {
                        warn!("History disabled: {e}");
                        editor
                    }
                }
            }
            None => editor,
        }
    }

    fn create_menu() -> ReedlineMenu {
        let menu = ColumnarMenu::default().with_name(MENU_NAME);
        ReedlineMenu::EngineCompleter(Box::new(menu))
    }

    fn create_edit_mode() -> Box<dyn EditMode> {
        let mut keybindings = default_emacs_keybindings();

        // Tab for completion
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(MENU_NAME.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        // Shift+Tab for previous completion
        keybindings.add_binding(
            KeyModifiers::SHIFT,
            KeyCode::BackTab,
            ReedlineEvent::MenuPrevious,
        );

        Box::new(Emacs::new(keybindings))
    }

    fn print_banner(&self) {
        println!();
        println!("\x1b[1mshape-board\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "  \x1b[90m{}x{} board, {} shape(s) loaded\x1b[0m",
            crate::canvas::BOARD_WIDTH,
            crate::canvas::BOARD_HEIGHT,
            self.session.board().len()
        );
        println!("  \x1b[90mType help for commands, Tab to complete\x1b[0m");
        println!();
    }
}

/// Drive a session from a line stream, writing replies and errors to `out`
///
/// Stops at `exit` or end of input. Command failures are reported and the
/// loop continues; only IO failures on `input`/`out` abort.
pub fn run_script<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        match session.execute(&line) {
            Ok(Reply::Text(text)) => writeln!(out, "{text}")?,
            Ok(Reply::Silent) => {}
            Ok(Reply::Exit) => break,
            Err(e) => {
                debug!("Command failed: {e}");
                writeln!(out, "Error: {e}")?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
