//! Streak analytics over completion events.
//!
//! Pure, synchronous functions: callers fetch a habit's completion
//! timestamps, normalization collapses them to canonical period-start
//! dates, and the streak walks derive longest/current run lengths. No
//! state is held between calls and nothing here performs I/O, so the
//! whole module is safe to call from anywhere.

mod normalize;
mod streak;

#[cfg(test)]
mod streak_test;

pub use normalize::normalize;
pub use streak::{current_streak, longest_streak};
