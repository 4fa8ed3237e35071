//! Core game logic layer
//!
//! This module contains the game rules, round state and input routing.
//! NO imports from frontend/ or rendering code.
//! Core updates its state in response to `GameEvent`s; frontends read and render.

pub mod app_core;
pub mod difficulty;
pub mod events;
pub mod gameplay;
pub mod input_router;
pub mod menu;
pub mod menu_actions;
pub mod round;
pub mod state;

pub use app_core::AppCore;
pub use difficulty::Difficulty;
pub use state::Screen;
