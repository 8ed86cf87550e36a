//! Terminal rendering of the board.
use std::{
    fmt::Arguments,
    io::{self, BufRead, StdinLock, Stdout, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use crate::controller::{BoardView, WishEntry};

const CONFETTI: &str = "🎉 🎊 ✨ 🎈 🎉 🎊 ✨ 🎈";

/// One line typed on the interactive board.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    Remove(i64),
    List,
    Quit,
    Unknown(String),
}

pub fn parse_action(line: &str) -> Action {
    let line = line.trim();

    let Some(command) = line.strip_prefix('/') else {
        return Action::Submit(line.to_string());
    };

    let mut parts = command.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("quit" | "q"), None, None) => Action::Quit,
        (Some("list" | "ls"), None, None) => Action::List,
        (Some("rm" | "remove"), Some(id), None) => match id.parse() {
            Ok(id) => Action::Remove(id),
            Err(_) => Action::Unknown(line.to_string()),
        },
        _ => Action::Unknown(line.to_string()),
    }
}

pub struct TerminalView<R, W> {
    input: R,
    output: W,
    spinner: Option<ProgressBar>,
    auto_confirm: bool,
    rendered: Vec<WishEntry>,
}

impl TerminalView<StdinLock<'static>, Stdout> {
    pub fn stdio(auto_confirm: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), auto_confirm)
    }
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub fn new(input: R, output: W, auto_confirm: bool) -> Self {
        Self {
            input,
            output,
            spinner: None,
            auto_confirm,
            rendered: Vec::new(),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// `None` once the input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        }
    }

    pub fn print_board(&mut self) {
        if self.rendered.is_empty() {
            self.line(format_args!("No wishes yet. Be the first!"));
            return;
        }

        for entry in &self.rendered {
            if let Err(e) = writeln!(self.output, "  #{:<4} {}", entry.id, entry.content) {
                warn!("Failed to write to terminal: {e}");
                return;
            }
        }

        if let Err(e) = self.output.flush() {
            warn!("Failed to write to terminal: {e}");
        }
    }

    fn line(&mut self, args: Arguments) {
        if let Err(e) = writeln!(self.output, "{args}").and_then(|_| self.output.flush()) {
            warn!("Failed to write to terminal: {e}");
        }
    }
}

impl<R: BufRead, W: Write> BoardView for TerminalView<R, W> {
    fn set_loading(&mut self, loading: bool) {
        if !loading {
            if let Some(spinner) = self.spinner.take() {
                spinner.finish_and_clear();
            }
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Loading wishes...");
        spinner.enable_steady_tick(Duration::from_millis(80));

        self.spinner = Some(spinner);
    }

    fn replace_all(&mut self, entries: &[WishEntry]) {
        self.rendered = entries.to_vec();
        self.print_board();
    }

    fn append(&mut self, entry: &WishEntry) {
        self.rendered.push(entry.clone());
        self.line(format_args!("+ #{:<4} {}", entry.id, entry.content));
    }

    fn remove(&mut self, id: i64) {
        let Some(index) = self.rendered.iter().position(|entry| entry.id == id) else {
            return;
        };

        let entry = self.rendered.remove(index);
        let struck: String = entry
            .content
            .chars()
            .flat_map(|c| [c, '\u{0336}'])
            .collect();

        self.line(format_args!("- #{:<4} {struck}", entry.id));
    }

    /// Lines are consumed as they are read, there is no draft left to clear.
    fn clear_input(&mut self) {}

    fn celebrate(&mut self) {
        self.line(format_args!("{CONFETTI}"));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.auto_confirm {
            return true;
        }

        if let Err(e) = write!(self.output, "{prompt} [y/N] ").and_then(|_| self.output.flush()) {
            warn!("Failed to write to terminal: {e}");
        }

        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }
}
