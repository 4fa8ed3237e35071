//! Input routing
//!
//! Turns key presses and pastes into `GameEvent`s based on:
//! - Current screen (menu, running round, finished round)
//! - Keybinds configuration
//! - Contents of the guess field (typing produces the field's next text)

use crate::config::Keybinds;
use crate::core::events::GameEvent;
use crate::core::menu_actions::{ActionContext, MenuAction};
use crate::core::state::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key event to a GameEvent based on current screen
pub fn route_input(key: KeyEvent, screen: &Screen, keybinds: &Keybinds) -> Option<GameEvent> {
    let context = get_action_context(screen);
    let action = keybinds.resolve_action(key, context);

    match action {
        MenuAction::Quit => return Some(GameEvent::Exit),
        MenuAction::NewGame => return Some(GameEvent::ReturnToMenu),
        MenuAction::ToggleHints => return Some(GameEvent::ToggleHints),
        _ => {}
    }

    match screen {
        Screen::Menu(menu) => match action {
            MenuAction::NavigateUp => Some(GameEvent::SelectPrevious),
            MenuAction::NavigateDown => Some(GameEvent::SelectNext),
            MenuAction::Select => Some(menu.selected_item().event()),
            _ => None,
        },
        Screen::Playing(gameplay) => match context {
            ActionContext::Guessing => match action {
                MenuAction::Submit => Some(GameEvent::SubmitGuess),
                MenuAction::None => edit_guess(key, gameplay.round().guess()),
                _ => None,
            },
            _ => match action {
                MenuAction::NavigateUp | MenuAction::NavigateLeft => Some(GameEvent::SelectPrevious),
                MenuAction::NavigateDown | MenuAction::NavigateRight => Some(GameEvent::SelectNext),
                MenuAction::Select => gameplay.selected_option().map(|option| option.event()),
                _ => None,
            },
        },
    }
}

/// Route pasted text: appended to the guess field while a round is running
pub fn route_paste(text: &str, screen: &Screen) -> Option<GameEvent> {
    let gameplay = screen.gameplay()?;
    if !gameplay.round().accepts_input() {
        return None;
    }
    Some(GameEvent::GuessChanged(format!(
        "{}{}",
        gameplay.round().guess(),
        text
    )))
}

/// Map the screen to ActionContext for keybind resolution
fn get_action_context(screen: &Screen) -> ActionContext {
    match screen {
        Screen::Menu(_) => ActionContext::Menu,
        Screen::Playing(gameplay) if gameplay.round().accepts_input() => ActionContext::Guessing,
        Screen::Playing(_) => ActionContext::RoundOver,
    }
}

/// Unbound keys edit the guess field as a plain text entry would
fn edit_guess(key: KeyEvent, current: &str) -> Option<GameEvent> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(GameEvent::GuessChanged(format!("{}{}", current, c))),
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop()?;
            Some(GameEvent::GuessChanged(text))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use crate::core::gameplay::Gameplay;
    use crate::core::menu::MenuState;
    use crate::core::round::Round;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn playing(target: u32, guess: &str) -> Screen {
        let mut gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, target, false));
        gameplay.on_guess_changed(guess);
        Screen::Playing(gameplay)
    }

    fn finished() -> Screen {
        let mut gameplay = Gameplay::from_round(Round::with_target(Difficulty::Easy, 4, false));
        gameplay.on_guess_changed("4");
        gameplay.on_submit();
        Screen::Playing(gameplay)
    }

    #[test]
    fn test_context_mapping() {
        assert_eq!(get_action_context(&Screen::menu()), ActionContext::Menu);
        assert_eq!(get_action_context(&playing(4, "")), ActionContext::Guessing);
        assert_eq!(get_action_context(&finished()), ActionContext::RoundOver);
    }

    #[test]
    fn test_menu_routing() {
        let keybinds = Keybinds::default();
        let mut menu = MenuState::new();
        menu.select_next();
        let screen = Screen::Menu(menu);

        assert_eq!(
            route_input(key(KeyCode::Enter), &screen, &keybinds),
            Some(GameEvent::SelectDifficulty(Difficulty::Intermediate))
        );
        assert_eq!(
            route_input(key(KeyCode::Down), &screen, &keybinds),
            Some(GameEvent::SelectNext)
        );
        assert_eq!(
            route_input(key(KeyCode::Up), &screen, &keybinds),
            Some(GameEvent::SelectPrevious)
        );
        assert_eq!(route_input(key(KeyCode::Char('5')), &screen, &keybinds), None);
    }

    #[test]
    fn test_typing_builds_guess() {
        let keybinds = Keybinds::default();
        let screen = playing(4, "1");
        assert_eq!(
            route_input(key(KeyCode::Char('2')), &screen, &keybinds),
            Some(GameEvent::GuessChanged("12".to_string()))
        );
        assert_eq!(
            route_input(key(KeyCode::Char('x')), &screen, &keybinds),
            Some(GameEvent::GuessChanged("1x".to_string()))
        );
        assert_eq!(
            route_input(key(KeyCode::Backspace), &screen, &keybinds),
            Some(GameEvent::GuessChanged(String::new()))
        );
        assert_eq!(
            route_input(key(KeyCode::Enter), &screen, &keybinds),
            Some(GameEvent::SubmitGuess)
        );
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let keybinds = Keybinds::default();
        assert_eq!(route_input(key(KeyCode::Backspace), &playing(4, ""), &keybinds), None);
    }

    #[test]
    fn test_round_over_routing() {
        let keybinds = Keybinds::default();
        let screen = finished();
        assert_eq!(
            route_input(key(KeyCode::Enter), &screen, &keybinds),
            Some(GameEvent::PlayAgain)
        );
        assert_eq!(
            route_input(key(KeyCode::Right), &screen, &keybinds),
            Some(GameEvent::SelectNext)
        );
        assert_eq!(route_input(key(KeyCode::Char('3')), &screen, &keybinds), None);
        assert_eq!(
            route_input(key(KeyCode::Tab), &screen, &keybinds),
            Some(GameEvent::ToggleHints)
        );
    }

    #[test]
    fn test_game_options_everywhere() {
        let keybinds = Keybinds::default();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        let new_game = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        for screen in [Screen::menu(), playing(4, "2"), finished()] {
            assert_eq!(route_input(quit, &screen, &keybinds), Some(GameEvent::Exit));
            assert_eq!(
                route_input(new_game, &screen, &keybinds),
                Some(GameEvent::ReturnToMenu)
            );
        }
    }

    #[test]
    fn test_paste_routing() {
        assert_eq!(
            route_paste("42", &playing(4, "1")),
            Some(GameEvent::GuessChanged("142".to_string()))
        );
        assert_eq!(route_paste("42", &Screen::menu()), None);
        assert_eq!(route_paste("42", &finished()), None);
    }
}
