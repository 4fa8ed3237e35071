//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend implements.
//! It provides a unified interface for event polling, rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from game logic. A frontend displays
/// whatever `AppCore` currently holds and forwards user input back to it.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, resize, paste) converted to
    /// the frontend-agnostic `FrontendEvent` enum; empty if none arrived.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Restore the terminal before the application exits
    fn cleanup(&mut self) -> Result<()>;

    /// Current drawable size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
