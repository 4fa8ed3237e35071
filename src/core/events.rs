//! Inbound game events
//!
//! Frontends translate clicks and key presses into these; the core only ever
//! reacts to a `GameEvent`.

use super::difficulty::Difficulty;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Start a round at this difficulty (menu only)
    SelectDifficulty(Difficulty),
    /// New contents of the guess field, before filtering
    GuessChanged(String),
    /// Evaluate the current guess
    SubmitGuess,
    /// Show or hide hint text
    ToggleHints,
    /// End-of-round "Play Again"
    PlayAgain,
    /// "New Game" from the options menu, valid at any time
    ReturnToMenu,
    /// Leave the program
    Exit,
    /// Move the highlighted menu/end-of-round option forward
    SelectNext,
    /// Move the highlighted menu/end-of-round option back
    SelectPrevious,
}
