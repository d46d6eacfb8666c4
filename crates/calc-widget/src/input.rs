//! Input routing: keys and labeled controls onto widget actions

/// Actions the widget understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a value to the expression buffer
    Append(String),
    /// Clear the buffer and reset the result view
    Clear,
    /// Delete the last buffer character
    Delete,
    /// Evaluate the buffer
    Evaluate,
    /// Clear the history list
    ClearHistory,
    /// Load the history entry at this position (0 = newest)
    SelectHistory(usize),
    /// Set the theme flag (`true` = light)
    SetTheme(bool),
}

/// An action plus what the host should do with the originating event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routed {
    /// The action to dispatch
    pub action: Action,
    /// Whether the host must suppress the event's default behavior
    pub prevent_default: bool,
}

impl Routed {
    const fn plain(action: Action) -> Self {
        Self {
            action,
            prevent_default: false,
        }
    }
}

/// `data-action` value of the clear control
pub const CONTROL_CLEAR: &str = "clear";
/// `data-action` value of the delete control
pub const CONTROL_DELETE: &str = "del";
/// `data-action` value of the equals control
pub const CONTROL_EQUALS: &str = "equals";

/// Maps keys and control descriptors onto [`Action`]s
#[derive(Debug, Default, Clone, Copy)]
pub struct InputRouter;

impl InputRouter {
    /// Creates a new router
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a keyboard key (as reported by `KeyboardEvent.key`).
    ///
    /// Shortcuts with Ctrl or Meta held are left to the host.
    #[must_use]
    pub fn route_key(&self, key: &str, ctrl: bool, meta: bool) -> Option<Routed> {
        if ctrl || meta {
            return None;
        }

        let routed = match key {
            "Enter" | "=" => Routed {
                action: Action::Evaluate,
                prevent_default: true,
            },
            "Backspace" => Routed::plain(Action::Delete),
            "c" | "C" => Routed::plain(Action::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch @ ('0'..='9' | '.' | '+' | '-' | '*' | '/' | '%')), None) => {
                        Routed::plain(Action::Append(ch.to_string()))
                    }
                    _ => return None,
                }
            }
        };
        Some(routed)
    }

    /// Maps a labeled control from its `data-action` / `data-value` pair.
    ///
    /// A known action wins over the value, and a value is appended whole.
    /// A control with neither is ignored.
    #[must_use]
    pub fn route_control(&self, action: Option<&str>, value: Option<&str>) -> Option<Action> {
        match action {
            Some(CONTROL_CLEAR) => Some(Action::Clear),
            Some(CONTROL_DELETE) => Some(Action::Delete),
            Some(CONTROL_EQUALS) => Some(Action::Evaluate),
            _ => value
                .filter(|v| !v.is_empty())
                .map(|v| Action::Append(v.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> Option<Routed> {
        InputRouter::new().route_key(k, false, false)
    }

    #[test]
    fn test_digits_and_dot_append() {
        for k in ["0", "5", "9", "."] {
            let ch = k.chars().next().unwrap();
            assert_eq!(
                key(k),
                Some(Routed::plain(Action::Append(ch.to_string())))
            );
        }
    }

    #[test]
    fn test_operators_append() {
        for ch in ['+', '-', '*', '/', '%'] {
            assert_eq!(
                key(&ch.to_string()).map(|r| r.action),
                Some(Action::Append(ch.to_string()))
            );
        }
    }

    #[test]
    fn test_enter_and_equals_evaluate_with_prevent_default() {
        for k in ["Enter", "="] {
            let routed = key(k).unwrap();
            assert_eq!(routed.action, Action::Evaluate);
            assert!(routed.prevent_default);
        }
    }

    #[test]
    fn test_backspace_deletes() {
        assert_eq!(key("Backspace").map(|r| r.action), Some(Action::Delete));
    }

    #[test]
    fn test_c_clears_case_insensitive() {
        assert_eq!(key("c").map(|r| r.action), Some(Action::Clear));
        assert_eq!(key("C").map(|r| r.action), Some(Action::Clear));
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        for k in ["a", "x", "Escape", "Tab", "ArrowLeft", "(", ")", "^", "12", ""] {
            assert_eq!(key(k), None, "key {k:?} should be ignored");
        }
    }

    #[test]
    fn test_modifier_shortcuts_ignored() {
        let router = InputRouter::new();
        assert_eq!(router.route_key("c", true, false), None);
        assert_eq!(router.route_key("v", false, true), None);
    }

    #[test]
    fn test_control_actions() {
        let router = InputRouter::new();
        assert_eq!(
            router.route_control(Some("clear"), None),
            Some(Action::Clear)
        );
        assert_eq!(router.route_control(Some("del"), None), Some(Action::Delete));
        assert_eq!(
            router.route_control(Some("equals"), Some("=")),
            Some(Action::Evaluate)
        );
    }

    #[test]
    fn test_control_values_append() {
        let router = InputRouter::new();
        assert_eq!(
            router.route_control(None, Some("7")),
            Some(Action::Append("7".into()))
        );
        assert_eq!(
            router.route_control(None, Some("(")),
            Some(Action::Append("(".into()))
        );
    }

    #[test]
    fn test_multi_char_value_is_one_append() {
        let router = InputRouter::new();
        assert_eq!(
            router.route_control(None, Some("+*")),
            Some(Action::Append("+*".into()))
        );
        assert_eq!(
            router.route_control(None, Some("00")),
            Some(Action::Append("00".into()))
        );
    }

    #[test]
    fn test_control_without_descriptor_ignored() {
        let router = InputRouter::new();
        assert_eq!(router.route_control(None, None), None);
        assert_eq!(router.route_control(None, Some("")), None);
        assert_eq!(router.route_control(Some("unknown"), None), None);
    }
}
