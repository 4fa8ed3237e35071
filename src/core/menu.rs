//! Main menu controller
//!
//! Three difficulty choices and an exit action, with a wrap-around cursor.

use super::difficulty::Difficulty;
use super::events::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play(Difficulty),
    Exit,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Play(difficulty) => difficulty.label(),
            MenuItem::Exit => "Exit Game",
        }
    }

    /// Event fired when this item is activated
    pub fn event(self) -> GameEvent {
        match self {
            MenuItem::Play(difficulty) => GameEvent::SelectDifficulty(difficulty),
            MenuItem::Exit => GameEvent::Exit,
        }
    }
}

/// One entry per difficulty, then exit
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::Play(Difficulty::ALL[0]),
    MenuItem::Play(Difficulty::ALL[1]),
    MenuItem::Play(Difficulty::ALL[2]),
    MenuItem::Exit,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    selected_index: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        &MENU_ITEMS
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_item(&self) -> MenuItem {
        MENU_ITEMS[self.selected_index]
    }

    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % MENU_ITEMS.len();
    }

    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = MENU_ITEMS.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }
}
