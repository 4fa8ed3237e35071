//! Top-level screen state
//!
//! The program is either showing the main menu or playing a round.

use super::gameplay::Gameplay;
use super::menu::MenuState;

#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuState),
    Playing(Gameplay),
}

impl Screen {
    pub fn menu() -> Self {
        Screen::Menu(MenuState::new())
    }

    pub fn is_menu(&self) -> bool {
        matches!(self, Screen::Menu(_))
    }

    pub fn gameplay(&self) -> Option<&Gameplay> {
        match self {
            Screen::Playing(gameplay) => Some(gameplay),
            Screen::Menu(_) => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::menu()
    }
}

/// What a handled event leads to
#[derive(Debug)]
pub enum Transition {
    /// Continue on this screen (possibly the same one, updated)
    To(Screen),
    /// Terminate the program
    Quit,
}
