//! Terminal rendering for the review pane
//!
//! Draws the question/answer inside a box-drawing frame of the configured
//! content width, centered against the terminal, with a counters row
//! (deck / size / due / remaining) and a command row underneath. Purely
//! presentational: stateless between draws, fed by the session's current
//! card and counters.
//!
//! The review loop runs with the terminal in raw mode, so every line is
//! emitted with an explicit `\r\n`.

use std::io::{self, Write};

use mneme::cards::{Deck, FlashCard};
use mneme::state::DeckSummary;

/// Spaces between the frame edge and the text
const GUTTER: usize = 6;

pub struct Pane {
    content_cols: usize,
    term_cols: usize,
    term_rows: usize,
}

impl Pane {
    pub fn new(content_cols: usize) -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            content_cols,
            term_cols: cols as usize,
            term_rows: rows as usize,
        }
    }

    pub fn draw_question(
        &self,
        card: &FlashCard,
        deck: &Deck,
        due: usize,
        remaining: usize,
    ) -> io::Result<()> {
        let table = self.build_table(
            &card.question,
            true,
            &self.counters_row_text(deck, due, remaining),
            "(A) Answer    (Q) Quit",
        );
        self.flush_screen(&table)
    }

    pub fn draw_answer(
        &self,
        card: &FlashCard,
        deck: &Deck,
        due: usize,
        remaining: usize,
    ) -> io::Result<()> {
        let table = self.build_table(
            &card.answer,
            false,
            &self.counters_row_text(deck, due, remaining),
            "(1) Fail  ┃  (2) Hard  ┃  (3) Pass  ┃  (4) Easy  ┃  (Q) Quit",
        );
        self.flush_screen(&table)
    }

    /// Restore a plain screen after the session
    pub fn reset(&self) -> io::Result<()> {
        let mut out = io::stdout();
        write!(out, "\x1bc")?;
        out.flush()
    }

    fn counters_row_text(&self, deck: &Deck, due: usize, remaining: usize) -> String {
        format!(
            "Deck ({})  ┃  Deck Size: {:03}  ┃  Due: {:03}  ┃  Remaining: {:03}",
            deck.tag.as_deref().unwrap_or("all"),
            deck.size(),
            due,
            remaining
        )
    }

    /// Frame a message with padding rows, the counters row, and the
    /// command row. Every returned line is exactly `content_cols + 2`
    /// characters wide.
    fn build_table(
        &self,
        message: &str,
        center_text: bool,
        counters: &str,
        commands: &str,
    ) -> Vec<String> {
        let w = self.content_cols;
        let inner = w.saturating_sub(2 * GUTTER);
        let spacer = " ".repeat(GUTTER);

        let mut lines = Vec::new();
        lines.push(format!("┏{}┓", "━".repeat(w)));
        lines.push(format!("┃{}┃", " ".repeat(w)));
        lines.push(format!("┃{}┃", " ".repeat(w)));
        for text in wrap(message, inner) {
            let aligned = if center_text {
                pad_center(&text, inner)
            } else {
                pad_right(&text, inner)
            };
            lines.push(format!("┃{}{}{}┃", spacer, aligned, spacer));
        }
        lines.push(format!("┃{}┃", " ".repeat(w)));
        lines.push(format!("┃{}┃", " ".repeat(w)));
        lines.push(format!("┣{}┫", "━".repeat(w)));
        lines.push(format!("┃{}┃", pad_center(counters, w)));
        lines.push(format!("┣{}┫", "━".repeat(w)));
        lines.push(format!("┃{}┃", pad_center(commands, w)));
        lines.push(format!("┗{}┛", "━".repeat(w)));
        lines
    }

    /// Clear the screen and print the table centered both ways
    fn flush_screen(&self, lines: &[String]) -> io::Result<()> {
        let mut out = io::stdout();
        write!(out, "\x1bc")?;

        let offset = (self.term_rows / 2).saturating_sub(lines.len() / 2);
        for _ in 0..offset {
            write!(out, "\r\n")?;
        }
        for line in lines {
            let pad = (self.term_cols.saturating_sub(line.chars().count())) / 2;
            write!(out, "{}{}\r\n", " ".repeat(pad), line)?;
        }
        out.flush()
    }
}

/// Print per-deck aggregates (summary mode, cooked terminal)
pub fn print_summary(summaries: &[DeckSummary]) {
    println!("Deck summary");
    println!();
    if summaries.is_empty() {
        println!("  no decks persisted yet");
        return;
    }
    for s in summaries {
        let next_due = s
            .next_due
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<20}  size {:03}   due {:03}   next due {}",
            s.tag.as_deref().unwrap_or("all"),
            s.size,
            s.due,
            next_due
        );
    }
}

/// Word-wrap to `width`, preserving existing line breaks. Words longer
/// than the width are left intact rather than split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.chars().count() <= width {
            lines.push(raw.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn pad_center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(width - len - left))
}

fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(width - len))
}
