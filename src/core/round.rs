//! One round of play
//!
//! A `Round` is created when a difficulty is chosen and discarded when the
//! player goes back to the menu. The target never changes during a round,
//! lives only go down, and the status leaves `InProgress` exactly once.

use super::difficulty::Difficulty;
use rand::Rng;
use std::cmp::Ordering;

/// Longest guess the input field accepts
pub const MAX_GUESS_LEN: usize = 3;

/// Shown in place of the target until the round ends
pub const MASKED_ANSWER: &str = "?";

/// Strip everything but ASCII digits and keep at most `MAX_GUESS_LEN` of them
pub fn filter_guess(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(MAX_GUESS_LEN)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

/// How the last evaluated guess compared to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    TooLow,
    TooHigh,
    Correct,
}

impl Hint {
    fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Hint::TooLow,
            Ordering::Greater => Hint::TooHigh,
            Ordering::Equal => Hint::Correct,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Hint::TooLow => "Your guess is too low.",
            Hint::TooHigh => "Your guess is too high.",
            Hint::Correct => "Your guess is correct!",
        }
    }
}

/// Result of one evaluated guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guess: u32,
    pub hint: Hint,
    pub lives_remaining: u32,
    pub status: RoundStatus,
}

/// Transient state of a single round
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    target: u32,
    lives_remaining: u32,
    hints_enabled: bool,
    status: RoundStatus,
    /// Current (already filtered) contents of the guess field
    guess: String,
    /// Hint from the most recent guess, kept even while hints are hidden
    last_hint: Option<Hint>,
}

impl Round {
    /// Start a round with a target drawn uniformly from `1..=upper_bound`
    pub fn new<R: Rng + ?Sized>(difficulty: Difficulty, hints_enabled: bool, rng: &mut R) -> Self {
        let target = rng.random_range(1..=difficulty.upper_bound());
        Self::with_target(difficulty, target, hints_enabled)
    }

    /// Start a round with a known target
    pub fn with_target(difficulty: Difficulty, target: u32, hints_enabled: bool) -> Self {
        debug_assert!((1..=difficulty.upper_bound()).contains(&target));
        Self {
            difficulty,
            target,
            lives_remaining: difficulty.starting_lives(),
            hints_enabled,
            status: RoundStatus::InProgress,
            guess: String::new(),
            last_hint: None,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn lives_remaining(&self) -> u32 {
        self.lives_remaining
    }

    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn last_hint(&self) -> Option<Hint> {
        self.last_hint
    }

    /// Whether the guess field still takes input
    pub fn accepts_input(&self) -> bool {
        !self.status.is_over()
    }

    /// Replace the guess field contents, filtering as typed.
    ///
    /// Ignored once the round is over. Returns true if the stored guess changed.
    pub fn set_guess(&mut self, text: &str) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let filtered = filter_guess(text);
        if filtered == self.guess {
            return false;
        }
        self.guess = filtered;
        true
    }

    /// Evaluate the current guess.
    ///
    /// Returns `None` when nothing happened: the field is empty or the round
    /// is already over.
    pub fn submit_guess(&mut self) -> Option<GuessOutcome> {
        if !self.accepts_input() || self.guess.is_empty() {
            return None;
        }
        let guess: u32 = self.guess.parse().ok()?;

        let hint = Hint::from_ordering(guess.cmp(&self.target));
        self.last_hint = Some(hint);

        if hint == Hint::Correct {
            self.status = RoundStatus::Won;
        } else {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            if self.lives_remaining == 0 {
                self.status = RoundStatus::Lost;
            } else {
                self.guess.clear();
            }
        }

        Some(GuessOutcome {
            guess,
            hint,
            lives_remaining: self.lives_remaining,
            status: self.status,
        })
    }

    /// Flip hint visibility. Game state is untouched. Returns the new setting.
    pub fn toggle_hints(&mut self) -> bool {
        self.hints_enabled = !self.hints_enabled;
        self.hints_enabled
    }

    /// Hint text to display, if hints are on and a guess has been evaluated
    pub fn visible_hint(&self) -> Option<&'static str> {
        if self.hints_enabled {
            self.last_hint().map(Hint::message)
        } else {
            None
        }
    }

    /// The masked placeholder, or the target once the round is over
    pub fn answer_text(&self) -> String {
        if self.status.is_over() {
            self.target.to_string()
        } else {
            MASKED_ANSWER.to_string()
        }
    }

    pub fn range_message(&self) -> String {
        format!("Number is between 1 and {}", self.difficulty().upper_bound())
    }

    pub fn lives_message(&self) -> String {
        format!("Guesses Remaining: {}", self.lives_remaining())
    }

    /// Win/lose banner; `None` while the round is running
    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            RoundStatus::InProgress => None,
            RoundStatus::Won => Some("You Win!"),
            RoundStatus::Lost => Some("You Lost :("),
        }
    }

    /// Headline under the answer: the range while playing, then the banner
    pub fn message(&self) -> String {
        self.banner()
            .map(str::to_string)
            .unwrap_or_else(|| self.range_message())
    }
}
