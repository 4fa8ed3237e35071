//! Keybind validator
//!
//! Reports unbound critical actions, keys shared between actions that can
//! fire on the same screen, and game options bound to digits the guess
//! field needs.

use crate::config::{
    default_navigate_down, default_navigate_up, default_quit, default_select, default_submit,
    Keybinds,
};
use crate::core::menu_actions::normalize_keybind;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeybindIssue {
    /// A critical action has an empty binding
    Unbound {
        field: &'static str,
        default: String,
    },
    /// Several actions resolve from the same key
    SharedKey {
        key: String,
        fields: Vec<&'static str>,
    },
    /// A global action is bound to a digit, so the digit never reaches the guess field
    DigitBinding { field: &'static str, key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl KeybindIssue {
    pub fn severity(&self) -> Severity {
        match self {
            KeybindIssue::Unbound { .. } => Severity::Error,
            KeybindIssue::SharedKey { .. } | KeybindIssue::DigitBinding { .. } => {
                Severity::Warning
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            KeybindIssue::Unbound { field, default } => {
                format!("keybinds.{} is empty (default: {})", field, default)
            }
            KeybindIssue::SharedKey { key, fields } => {
                format!("'{}' is bound to {}", key, fields.join(" and "))
            }
            KeybindIssue::DigitBinding { field, key } => format!(
                "keybinds.{} = '{}' takes that digit away from the guess field",
                field, key
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct KeybindReport {
    pub issues: Vec<KeybindIssue>,
}

impl KeybindReport {
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &KeybindIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &KeybindIssue> {
        self.with_severity(Severity::Warning)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &KeybindIssue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity() == severity)
    }
}

/// Validate keybinds configuration
pub fn validate_keybinds(keybinds: &Keybinds) -> KeybindReport {
    let mut report = KeybindReport::default();

    // Without these the game cannot be played or left
    let critical = [
        ("select", &keybinds.select, default_select()),
        ("submit", &keybinds.submit, default_submit()),
        ("quit", &keybinds.quit, default_quit()),
        ("navigate_up", &keybinds.navigate_up, default_navigate_up()),
        ("navigate_down", &keybinds.navigate_down, default_navigate_down()),
    ];
    for (field, value, default) in critical {
        if value.trim().is_empty() {
            report.issues.push(KeybindIssue::Unbound { field, default });
        }
    }

    check_shared_keys(&mut report.issues, keybinds);
    check_digit_bindings(&mut report.issues, keybinds);

    report
}

/// Keys bound to more than one action.
///
/// `select` and `submit` may share a key: the first applies on the menu and
/// after a round, the second only while guessing.
fn check_shared_keys(issues: &mut Vec<KeybindIssue>, keybinds: &Keybinds) {
    let mut by_key: HashMap<String, Vec<&'static str>> = HashMap::new();
    for (field, value) in bound_fields(keybinds) {
        if !value.trim().is_empty() {
            by_key.entry(normalize_keybind(value)).or_default().push(field);
        }
    }

    let mut shared: Vec<(String, Vec<&'static str>)> = by_key
        .into_iter()
        .filter(|(_, fields)| fields.len() > 1 && !is_select_submit_pair(fields))
        .collect();
    shared.sort();

    issues.extend(
        shared
            .into_iter()
            .map(|(key, fields)| KeybindIssue::SharedKey { key, fields }),
    );
}

fn is_select_submit_pair(fields: &[&str]) -> bool {
    fields.len() == 2 && fields.contains(&"select") && fields.contains(&"submit")
}

/// Global actions are resolved before typed characters reach the guess field
fn check_digit_bindings(issues: &mut Vec<KeybindIssue>, keybinds: &Keybinds) {
    let globals = [
        ("toggle_hints", &keybinds.toggle_hints),
        ("new_game", &keybinds.new_game),
        ("quit", &keybinds.quit),
    ];
    for (field, value) in globals {
        let key = normalize_keybind(value);
        if key.len() == 1 && key.bytes().all(|b| b.is_ascii_digit()) {
            issues.push(KeybindIssue::DigitBinding { field, key });
        }
    }
}

fn bound_fields(keybinds: &Keybinds) -> [(&'static str, &str); 9] {
    [
        ("navigate_up", keybinds.navigate_up.as_str()),
        ("navigate_down", keybinds.navigate_down.as_str()),
        ("navigate_left", keybinds.navigate_left.as_str()),
        ("navigate_right", keybinds.navigate_right.as_str()),
        ("select", keybinds.select.as_str()),
        ("submit", keybinds.submit.as_str()),
        ("toggle_hints", keybinds.toggle_hints.as_str()),
        ("new_game", keybinds.new_game.as_str()),
        ("quit", keybinds.quit.as_str()),
    ]
}

/// Restore defaults for every unbound critical action. Returns how many were restored.
pub fn auto_fix_keybinds(keybinds: &mut Keybinds, issues: &[KeybindIssue]) -> usize {
    let mut fixed_count = 0;

    for issue in issues {
        if let KeybindIssue::Unbound { field, default } = issue {
            let slot = match *field {
                "select" => &mut keybinds.select,
                "submit" => &mut keybinds.submit,
                "quit" => &mut keybinds.quit,
                "navigate_up" => &mut keybinds.navigate_up,
                "navigate_down" => &mut keybinds.navigate_down,
                _ => continue,
            };
            *slot = default.clone();
            fixed_count += 1;
        }
    }

    fixed_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu_actions::{ActionContext, MenuAction};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_default_keybinds_are_clean() {
        let report = validate_keybinds(&Keybinds::default());
        assert!(report.issues.is_empty(), "{:?}", report.issues);
    }

    #[test]
    fn test_missing_critical_binding() {
        let mut keybinds = Keybinds::default();
        keybinds.quit = String::new();

        let report = validate_keybinds(&keybinds);
        assert!(report.has_errors());
        assert_eq!(report.errors().count(), 1);
        assert!(report.issues[0].message().contains("keybinds.quit"));
    }

    #[test]
    fn test_duplicate_binding_is_warning() {
        let mut keybinds = Keybinds::default();
        keybinds.toggle_hints = "Control+n".to_string();

        let report = validate_keybinds(&keybinds);
        assert!(!report.has_errors());
        let warnings: Vec<_> = report.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("new_game"));
    }

    #[test]
    fn test_submit_collides_with_toggle_hints() {
        let mut keybinds = Keybinds::default();
        keybinds.submit = "Tab".to_string();

        // While guessing, Tab submits and the hint toggle is unreachable
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(
            keybinds.resolve_action(tab, ActionContext::Guessing),
            MenuAction::Submit
        );

        let report = validate_keybinds(&keybinds);
        assert_eq!(
            report.issues,
            vec![KeybindIssue::SharedKey {
                key: "Tab".to_string(),
                fields: vec!["submit", "toggle_hints"],
            }]
        );
    }

    #[test]
    fn test_select_submit_share_only_as_a_pair() {
        let mut keybinds = Keybinds::default();
        keybinds.quit = "Enter".to_string();

        let report = validate_keybinds(&keybinds);
        assert_eq!(
            report.issues,
            vec![KeybindIssue::SharedKey {
                key: "Enter".to_string(),
                fields: vec!["select", "submit", "quit"],
            }]
        );
    }

    #[test]
    fn test_digit_global_binding_warns() {
        let mut keybinds = Keybinds::default();
        keybinds.toggle_hints = "7".to_string();

        let seven = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert_eq!(
            keybinds.resolve_action(seven, ActionContext::Guessing),
            MenuAction::ToggleHints
        );

        let report = validate_keybinds(&keybinds);
        assert!(!report.has_errors());
        assert_eq!(
            report.issues,
            vec![KeybindIssue::DigitBinding {
                field: "toggle_hints",
                key: "7".to_string(),
            }]
        );

        // Modified digits leave the guess field alone
        keybinds.toggle_hints = "Ctrl+7".to_string();
        assert!(validate_keybinds(&keybinds).issues.is_empty());
    }

    #[test]
    fn test_auto_fix() {
        let mut keybinds = Keybinds::default();
        keybinds.submit = String::new();
        keybinds.navigate_up = "  ".to_string();

        let report = validate_keybinds(&keybinds);
        assert_eq!(report.errors().count(), 2);

        let fixed = auto_fix_keybinds(&mut keybinds, &report.issues);
        assert_eq!(fixed, 2);
        assert_eq!(keybinds.submit, "Enter");
        assert_eq!(keybinds.navigate_up, "Up");

        assert!(validate_keybinds(&keybinds).issues.is_empty());
    }
}
