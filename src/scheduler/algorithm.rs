//! SM-2-style interval and easiness calculations
//!
//! Both functions are pure: `now` is a parameter so results are
//! reproducible. Grade tiers build on each other with a `previous + 1`
//! floor, which keeps Fail < Hard < Pass < Easy ordered no matter how the
//! deck modifiers are configured.

use chrono::{DateTime, Utc};

use crate::cards::{Deck, FlashCard, Grade};

/// Floor for the easiness factor (1300 = 1.3x)
pub const MIN_FACTOR: f64 = 1300.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Next review interval in days for `card` graded in `deck`.
///
/// Elapsed days since the card was due are real-valued and may be
/// negative when the card is reviewed early; they are deliberately not
/// clamped, so early reviews grow the interval less.
pub fn next_interval(grade: Grade, card: &FlashCard, deck: &Deck, now: DateTime<Utc>) -> f64 {
    let i = card.interval;
    let f = card.factor;
    let m = deck.standard_interval_modifier;
    let m0 = deck.fail_interval_modifier;
    let m4 = deck.easy_interval_modifier;
    let d = elapsed_days(now, card.due);

    let fail = m0 * i;
    let hard = (i + 1.0).max((i + d / 4.0) * 1.2 * m);
    let pass = (hard + 1.0).max((i + d / 2.0) * (f / 1000.0) * m);
    let easy = (pass + 1.0).max((i + d) * (f / 1000.0) * m * m4);

    match grade {
        Grade::Fail => fail,
        Grade::Hard => hard,
        Grade::Pass => pass,
        Grade::Easy => easy,
    }
}

/// Next easiness factor for `card`, floored at [`MIN_FACTOR`]
pub fn next_factor(grade: Grade, card: &FlashCard) -> f64 {
    match grade {
        Grade::Fail => MIN_FACTOR.max(card.factor - 200.0),
        Grade::Hard => MIN_FACTOR.max(card.factor - 150.0),
        Grade::Pass => card.factor,
        Grade::Easy => MIN_FACTOR.max(card.factor + 150.0),
    }
}

fn elapsed_days(now: DateTime<Utc>, due: DateTime<Utc>) -> f64 {
    (now - due).num_milliseconds() as f64 / MILLIS_PER_DAY
}
