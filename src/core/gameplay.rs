//! Gameplay controller
//!
//! Owns the running `Round` plus the cursor over the end-of-round options.
//! Every handler operates on that state directly; nothing else holds a
//! reference to the round.

use super::difficulty::Difficulty;
use super::events::GameEvent;
use super::round::{GuessOutcome, Round, RoundStatus};
use rand::Rng;

/// Choices offered once a round is won or lost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOption {
    PlayAgain,
    Exit,
}

impl EndOption {
    pub fn label(self) -> &'static str {
        match self {
            EndOption::PlayAgain => "Play Again",
            EndOption::Exit => "Exit",
        }
    }

    pub fn event(self) -> GameEvent {
        match self {
            EndOption::PlayAgain => GameEvent::PlayAgain,
            EndOption::Exit => GameEvent::Exit,
        }
    }
}

pub const END_OPTIONS: [EndOption; 2] = [EndOption::PlayAgain, EndOption::Exit];

#[derive(Debug, Clone)]
pub struct Gameplay {
    round: Round,
    end_selection: usize,
}

impl Gameplay {
    /// Begin a fresh round at `difficulty`
    pub fn start<R: Rng + ?Sized>(difficulty: Difficulty, hints_enabled: bool, rng: &mut R) -> Self {
        let round = Round::new(difficulty, hints_enabled, rng);
        tracing::info!(
            "Round started: {} (1..={}, {} lives)",
            difficulty,
            difficulty.upper_bound(),
            difficulty.starting_lives()
        );
        tracing::debug!("Target is {}", round.target());
        Self::from_round(round)
    }

    pub fn from_round(round: Round) -> Self {
        Self {
            round,
            end_selection: 0,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn on_guess_changed(&mut self, text: &str) {
        self.round.set_guess(text);
    }

    pub fn on_submit(&mut self) -> Option<GuessOutcome> {
        let outcome = self.round.submit_guess()?;
        tracing::debug!(
            "Guess {} -> {:?}, {} lives left",
            outcome.guess,
            outcome.hint,
            outcome.lives_remaining
        );
        match outcome.status {
            RoundStatus::Won => tracing::info!("Round won with {} lives left", outcome.lives_remaining),
            RoundStatus::Lost => tracing::info!("Round lost, target was {}", self.round.target()),
            RoundStatus::InProgress => {}
        }
        Some(outcome)
    }

    pub fn on_toggle_hints(&mut self) {
        let enabled = self.round.toggle_hints();
        tracing::debug!("Hints {}", if enabled { "on" } else { "off" });
    }

    /// End-of-round options, empty while the round is still running
    pub fn end_options(&self) -> &'static [EndOption] {
        if self.round.status().is_over() {
            &END_OPTIONS
        } else {
            &[]
        }
    }

    pub fn selected_option(&self) -> Option<EndOption> {
        self.end_options().get(self.end_selection).copied()
    }

    pub fn select_next_option(&mut self) {
        let len = self.end_options().len();
        if len > 0 {
            self.end_selection = (self.end_selection + 1) % len;
        }
    }

    pub fn select_previous_option(&mut self) {
        let len = self.end_options().len();
        if len > 0 {
            self.end_selection = (self.end_selection + len - 1) % len;
        }
    }
}
