use crate::config::Config;
use crate::core::difficulty::Difficulty;
use crate::core::events::GameEvent;
use crate::core::gameplay::Gameplay;
use crate::core::input_router;
use crate::core::state::{Screen, Transition};
use crossterm::event::KeyEvent;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the configuration, the random source and the current screen.
/// Frontends feed it input and read `screen()` to render.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Menu or running round
    screen: Screen,

    /// Source of round targets
    rng: StdRng,

    /// Application running flag
    pub running: bool,

    /// Set whenever state changed since the last frame
    pub needs_render: bool,
}

impl AppCore {
    /// Create the core on the main menu.
    ///
    /// `seed` fixes the target sequence; without one the RNG is seeded from the OS.
    pub fn new(config: Config, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                tracing::info!("Using fixed seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            screen: Screen::menu(),
            rng,
            running: true,
            needs_render: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Handle a key press from the frontend
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(event) = input_router::route_input(key, &self.screen, &self.config.keybinds) {
            self.handle_event(event);
        }
    }

    /// Handle pasted text from the frontend
    pub fn handle_paste(&mut self, text: &str) {
        if let Some(event) = input_router::route_paste(text, &self.screen) {
            self.handle_event(event);
        }
    }

    /// Apply one event to the current screen
    pub fn handle_event(&mut self, event: GameEvent) {
        tracing::trace!("Event: {:?}", event);
        let screen = std::mem::take(&mut self.screen);
        match self.dispatch(screen, event) {
            Transition::To(next) => self.screen = next,
            Transition::Quit => {
                tracing::info!("Exit requested");
                self.running = false;
            }
        }
        self.needs_render = true;
    }

    /// Event dispatch table: (screen, event) -> handler
    fn dispatch(&mut self, screen: Screen, event: GameEvent) -> Transition {
        match (screen, event) {
            (_, GameEvent::Exit) => Transition::Quit,

            // Menu controller
            (Screen::Menu(_), GameEvent::SelectDifficulty(difficulty)) => {
                Transition::To(self.start_round(difficulty))
            }
            (Screen::Menu(mut menu), GameEvent::SelectNext) => {
                menu.select_next();
                Transition::To(Screen::Menu(menu))
            }
            (Screen::Menu(mut menu), GameEvent::SelectPrevious) => {
                menu.select_previous();
                Transition::To(Screen::Menu(menu))
            }

            // Gameplay controller
            (Screen::Playing(mut gameplay), GameEvent::GuessChanged(text)) => {
                gameplay.on_guess_changed(&text);
                Transition::To(Screen::Playing(gameplay))
            }
            (Screen::Playing(mut gameplay), GameEvent::SubmitGuess) => {
                gameplay.on_submit();
                Transition::To(Screen::Playing(gameplay))
            }
            (Screen::Playing(mut gameplay), GameEvent::ToggleHints) => {
                gameplay.on_toggle_hints();
                Transition::To(Screen::Playing(gameplay))
            }
            (Screen::Playing(mut gameplay), GameEvent::SelectNext) => {
                gameplay.select_next_option();
                Transition::To(Screen::Playing(gameplay))
            }
            (Screen::Playing(mut gameplay), GameEvent::SelectPrevious) => {
                gameplay.select_previous_option();
                Transition::To(Screen::Playing(gameplay))
            }
            (Screen::Playing(gameplay), GameEvent::PlayAgain) => {
                if gameplay.round().status().is_over() {
                    tracing::info!("Play again");
                    Transition::To(Screen::menu())
                } else {
                    Transition::To(Screen::Playing(gameplay))
                }
            }
            (Screen::Playing(_), GameEvent::ReturnToMenu) => {
                tracing::info!("Returning to menu");
                Transition::To(Screen::menu())
            }

            // Anything else does not apply to this screen
            (screen, event) => {
                tracing::trace!("Ignoring {:?} on this screen", event);
                Transition::To(screen)
            }
        }
    }

    /// Skip the menu and start a round directly
    pub fn start_at(&mut self, difficulty: Difficulty) {
        if !self.screen.is_menu() {
            self.handle_event(GameEvent::ReturnToMenu);
        }
        self.handle_event(GameEvent::SelectDifficulty(difficulty));
    }

    fn start_round(&mut self, difficulty: Difficulty) -> Screen {
        Screen::Playing(Gameplay::start(
            difficulty,
            self.config.ui.hints_enabled,
            &mut self.rng,
        ))
    }
}
