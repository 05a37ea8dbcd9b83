//! Terminal input boundary
//!
//! Each session state accepts a small input alphabet; anything else is
//! swallowed and the read loops until a valid key arrives (the pane stays
//! on screen, so looping is the re-prompt). Ctrl-C is folded into Quit so
//! an interrupt takes the same save-then-exit path as `q`.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use mneme::cards::Grade;

/// Valid inputs while the question is on screen
pub enum QuestionCommand {
    Reveal,
    Quit,
}

/// Valid inputs while the answer is on screen
pub enum GradeCommand {
    Grade(Grade),
    Quit,
}

pub fn read_question_command() -> io::Result<QuestionCommand> {
    loop {
        let key = next_key_press()?;
        if is_quit(&key) {
            return Ok(QuestionCommand::Quit);
        }
        if let KeyCode::Char('a') | KeyCode::Char('A') = key.code {
            return Ok(QuestionCommand::Reveal);
        }
    }
}

pub fn read_grade_command() -> io::Result<GradeCommand> {
    loop {
        let key = next_key_press()?;
        if is_quit(&key) {
            return Ok(GradeCommand::Quit);
        }
        if let KeyCode::Char(c) = key.code {
            if let Some(grade) = grade_for(c) {
                return Ok(GradeCommand::Grade(grade));
            }
        }
    }
}

fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        _ => false,
    }
}

/// Grades are restricted to the four-valued enum right here at the
/// boundary; the scheduler never sees an out-of-range value
fn grade_for(c: char) -> Option<Grade> {
    match c {
        '1' => Some(Grade::Fail),
        '2' => Some(Grade::Hard),
        '3' => Some(Grade::Pass),
        '4' => Some(Grade::Easy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_keys() {
        assert_eq!(grade_for('1'), Some(Grade::Fail));
        assert_eq!(grade_for('2'), Some(Grade::Hard));
        assert_eq!(grade_for('3'), Some(Grade::Pass));
        assert_eq!(grade_for('4'), Some(Grade::Easy));
        assert_eq!(grade_for('5'), None);
        assert_eq!(grade_for('a'), None);
    }

    #[test]
    fn test_ctrl_c_is_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_quit(&key));
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!is_quit(&plain));
    }
}
