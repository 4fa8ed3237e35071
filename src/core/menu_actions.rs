//! Shared action vocabulary for menu and gameplay keys.
//!
//! Translates raw `KeyEvent`s and textual keybinds into semantic `MenuAction`s
//! so every screen reacts consistently to the configured bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All possible bound actions
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    // Navigation
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,

    // Selection/Confirmation
    Select, // Enter - activate highlighted item
    Submit, // Enter - evaluate the guess

    ToggleHints,

    // Game options
    NewGame,
    Quit,

    // No action (key not bound or not applicable in this context)
    None,
}

/// Context for action resolution - determines which actions are valid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionContext {
    Menu,      // Main menu (navigate + select)
    Guessing,  // Round running, guess field focused
    RoundOver, // Round won/lost, end options shown
}

/// Convert KeyEvent to string representation for matching against keybinds
pub fn key_event_to_string(key: KeyEvent) -> String {
    let mut parts = Vec::new();

    // Add modifiers
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    // Add key code
    let key_str = match key.code {
        KeyCode::Char(c) => {
            // For letter keys with Shift+Ctrl/Alt, use uppercase
            if key.modifiers.contains(KeyModifiers::SHIFT) && c.is_ascii_lowercase() {
                c.to_ascii_uppercase().to_string()
            } else {
                c.to_string()
            }
        }
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            // BackTab is usually Shift+Tab, so remove Shift from parts if present
            parts.retain(|p| *p != "Shift");
            parts.push("Shift");
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return String::new(), // Unrecognized key
    };

    parts.push(&key_str);
    parts.join("+")
}

/// Parse a keybind string into components for comparison
pub fn normalize_keybind(s: &str) -> String {
    // Normalize the keybind string (handle case, order modifiers)
    let parts: Vec<&str> = s.split('+').collect();
    let mut modifiers = Vec::new();
    let mut key = "";

    for part in parts {
        match part.trim() {
            "Ctrl" | "Control" => modifiers.push("Ctrl"),
            "Shift" => modifiers.push("Shift"),
            "Alt" => modifiers.push("Alt"),
            k => key = k,
        }
    }

    // Sort modifiers for consistent comparison
    modifiers.sort();
    modifiers.push(key);
    modifiers.join("+")
}

/// True if `key` triggers the keybind string `binding`. Empty bindings never match.
pub fn keybind_matches(key: KeyEvent, binding: &str) -> bool {
    if binding.trim().is_empty() {
        return false;
    }
    let key_str = key_event_to_string(key);
    !key_str.is_empty() && normalize_keybind(&key_str) == normalize_keybind(binding)
}
