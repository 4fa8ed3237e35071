//! Difficulty levels
//!
//! Each level fixes the target range and how many wrong guesses a round allows.

use std::fmt;

/// Selectable difficulty for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All levels in menu order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard];

    /// Largest possible target (the range is always `1..=upper_bound`)
    pub fn upper_bound(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Intermediate => 50,
            Difficulty::Hard => 100,
        }
    }

    /// Lives a round starts with
    pub fn starting_lives(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Intermediate => 5,
            Difficulty::Hard => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
