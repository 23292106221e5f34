use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    ToggleTheme,
    CycleFilter,
    CycleSort,

    // Focus
    FocusNext,
    FocusPrevious,
    FocusForm,
    FocusTable,

    // Form
    Submit,
    ClearForm,

    // Table
    NavigateUp,
    NavigateDown,
    SelectFirst,
    SelectLast,
    DeleteRecord,

    // Confirmation
    Confirm,
    Cancel,
}

impl Action {
    /// Returns the footer label used when a binding has none of its own.
    #[must_use]
    pub const fn default_label(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleTheme => "Theme",
            Self::CycleFilter => "Filter",
            Self::CycleSort => "Sort",
            Self::FocusNext => "Next",
            Self::FocusPrevious => "Prev",
            Self::FocusForm => "Add item",
            Self::FocusTable => "Table",
            Self::Submit => "Add",
            Self::ClearForm => "Clear",
            Self::NavigateUp => "Up",
            Self::NavigateDown => "Down",
            Self::SelectFirst => "First",
            Self::SelectLast => "Last",
            Self::DeleteRecord => "Delete",
            Self::Confirm => "Yes",
            Self::Cancel => "No",
        }
    }
}

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyScope {
    /// Everywhere except inside the confirmation dialog.
    Global,
    /// While a form field has focus.
    Form,
    /// While the record table has focus.
    Table,
    /// While the delete confirmation is open.
    Confirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub scope: KeyScope,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(
        key: KeyEvent,
        action: Action,
        scope: KeyScope,
        label: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            key,
            action,
            scope,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    pub fn display(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(text.into());
        self
    }

    /// Returns whether `event` triggers this binding.
    ///
    /// Shift is ignored on character keys since the character already
    /// carries the case.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key.code != event.code {
            return false;
        }
        let strip = |m: KeyModifiers| {
            if matches!(event.code, KeyCode::Char(_)) {
                m - KeyModifiers::SHIFT
            } else {
                m
            }
        };
        strip(self.key.modifiers) == strip(event.modifiers)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeybindingError {
    #[error("empty key description")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Parses key descriptions such as `"Ctrl+t"`, `"Shift+Tab"`, `"F2"` or `"Del"`.
///
/// # Errors
///
/// Returns `KeybindingError` when a modifier or key name is not recognised.
pub fn parse_key(description: &str) -> Result<KeyEvent, KeybindingError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(KeybindingError::Empty);
    }

    let (modifier_part, key_part) = match description.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", description),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "meta" | "a" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return Err(KeybindingError::UnknownModifier(part.to_string())),
        };
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => KeyCode::Char(c),
        _ => match key_part.to_ascii_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" | "bksp" => KeyCode::Backspace,
            "del" | "delete" => KeyCode::Delete,
            "ins" | "insert" => KeyCode::Insert,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "space" => KeyCode::Char(' '),
            other => match other.strip_prefix('f').map(str::parse::<u8>) {
                Some(Ok(n)) if (1..=12).contains(&n) => KeyCode::F(n),
                _ => return Err(KeybindingError::UnknownKey(key_part.to_string())),
            },
        },
    };

    if code == KeyCode::BackTab {
        modifiers -= KeyModifiers::SHIFT;
    }

    Ok(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Whether `key` would type a character into a focused text field.
fn is_text_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(_))
        && !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Ordered binding table with scope-aware lookup.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Keybind>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use Action as A;
        use KeyScope as S;

        let bindings = vec![
            Keybind::new(ctrl('c'), A::Quit, S::Global, "Quit"),
            Keybind::new(ctrl('t'), A::ToggleTheme, S::Global, "Theme"),
            Keybind::new(ctrl('f'), A::CycleFilter, S::Global, "Filter"),
            Keybind::new(ctrl('o'), A::CycleSort, S::Global, "Sort"),
            Keybind::new(key(KeyCode::Tab), A::FocusNext, S::Global, "Next"),
            Keybind::new(key(KeyCode::BackTab), A::FocusPrevious, S::Global, "Prev").hidden(),
            Keybind::new(key(KeyCode::Enter), A::Submit, S::Form, "Add"),
            Keybind::new(ctrl('u'), A::ClearForm, S::Form, "Clear"),
            Keybind::new(key(KeyCode::Esc), A::FocusTable, S::Form, "Table"),
            Keybind::new(key(KeyCode::Up), A::NavigateUp, S::Table, "Move").display("↑↓"),
            Keybind::new(key(KeyCode::Char('k')), A::NavigateUp, S::Table, "Up").hidden(),
            Keybind::new(key(KeyCode::Down), A::NavigateDown, S::Table, "Down").hidden(),
            Keybind::new(key(KeyCode::Char('j')), A::NavigateDown, S::Table, "Down").hidden(),
            Keybind::new(key(KeyCode::Home), A::SelectFirst, S::Table, "First").hidden(),
            Keybind::new(key(KeyCode::Char('g')), A::SelectFirst, S::Table, "First").hidden(),
            Keybind::new(key(KeyCode::End), A::SelectLast, S::Table, "Last").hidden(),
            Keybind::new(key(KeyCode::Char('G')), A::SelectLast, S::Table, "Last").hidden(),
            Keybind::new(key(KeyCode::Char('d')), A::DeleteRecord, S::Table, "Delete"),
            Keybind::new(key(KeyCode::Delete), A::DeleteRecord, S::Table, "Delete").hidden(),
            Keybind::new(key(KeyCode::Char('a')), A::FocusForm, S::Table, "Add item"),
            Keybind::new(key(KeyCode::Char('t')), A::ToggleTheme, S::Table, "Theme").hidden(),
            Keybind::new(key(KeyCode::Char('f')), A::CycleFilter, S::Table, "Filter").hidden(),
            Keybind::new(key(KeyCode::Char('s')), A::CycleSort, S::Table, "Sort").hidden(),
            Keybind::new(key(KeyCode::Char('q')), A::Quit, S::Table, "Quit").hidden(),
            Keybind::new(key(KeyCode::Char('y')), A::Confirm, S::Confirm, "Yes"),
            Keybind::new(key(KeyCode::Enter), A::Confirm, S::Confirm, "Yes").hidden(),
            Keybind::new(key(KeyCode::Char('n')), A::Cancel, S::Confirm, "No"),
            Keybind::new(key(KeyCode::Esc), A::Cancel, S::Confirm, "No").hidden(),
        ];

        Self { bindings }
    }
}

impl KeyMap {
    /// Applies user overrides from the config file.
    ///
    /// An override replaces the action's default binding in its scope and any
    /// binding already using that key. Plain characters bind in the table
    /// scope only, so they keep typing into the form; everything else binds
    /// globally. Invalid key descriptions are skipped and returned.
    pub fn apply_overrides(
        &mut self,
        overrides: &HashMap<String, Action>,
    ) -> Vec<(String, KeybindingError)> {
        let mut errors = Vec::new();

        let mut entries: Vec<_> = overrides.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (description, &action) in entries {
            let key = match parse_key(description) {
                Ok(key) => key,
                Err(e) => {
                    errors.push((description.clone(), e));
                    continue;
                }
            };

            let scope = if is_text_key(&key) {
                KeyScope::Table
            } else {
                KeyScope::Global
            };

            self.bindings.retain(|b| {
                let same_key = b.scope != KeyScope::Confirm
                    && b.key.code == key.code
                    && b.key.modifiers == key.modifiers;
                let replaced_default = b.scope == scope && b.action == action;
                !same_key && !replaced_default
            });
            self.bindings.push(
                Keybind::new(key, action, scope, action.default_label())
                    .display(description.clone()),
            );
        }

        errors
    }

    /// Resolves a key press. Scope bindings win over global ones; the
    /// confirmation scope never falls through.
    #[must_use]
    pub fn resolve(&self, scope: KeyScope, event: &KeyEvent) -> Option<Action> {
        let lookup = |s: KeyScope| {
            self.bindings
                .iter()
                .find(|b| b.scope == s && b.matches(event))
                .map(|b| b.action)
        };

        match scope {
            KeyScope::Confirm | KeyScope::Global => lookup(scope),
            _ => lookup(scope).or_else(|| lookup(KeyScope::Global)),
        }
    }

    /// Returns the bindings shown in the footer for `scope`.
    #[must_use]
    pub fn bar_bindings(&self, scope: KeyScope) -> Vec<Keybind> {
        let scoped = self
            .bindings
            .iter()
            .filter(|b| b.visible_in_bar && b.scope == scope);

        if scope == KeyScope::Confirm {
            return scoped.cloned().collect();
        }

        scoped
            .chain(
                self.bindings
                    .iter()
                    .filter(|b| b.visible_in_bar && b.scope == KeyScope::Global),
            )
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Ctrl+t", KeyCode::Char('t'), KeyModifiers::CONTROL ; "ctrl_char")]
    #[test_case("alt+X", KeyCode::Char('X'), KeyModifiers::ALT ; "alt_upper")]
    #[test_case("Shift+Tab", KeyCode::BackTab, KeyModifiers::NONE ; "shift_tab")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function_key")]
    #[test_case("Del", KeyCode::Delete, KeyModifiers::NONE ; "delete")]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL ; "plus_key")]
    #[test_case("q", KeyCode::Char('q'), KeyModifiers::NONE ; "plain_char")]
    fn test_parse_key(input: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(input), Ok(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn test_parse_key_errors() {
        assert_eq!(parse_key("  "), Err(KeybindingError::Empty));
        assert_eq!(
            parse_key("Hyper+x"),
            Err(KeybindingError::UnknownModifier("Hyper".to_string()))
        );
        assert_eq!(
            parse_key("F13"),
            Err(KeybindingError::UnknownKey("F13".to_string()))
        );
    }

    #[test]
    fn test_scope_binding_wins_over_global() {
        let map = KeyMap::default();
        assert_eq!(
            map.resolve(KeyScope::Table, &key(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
        assert_eq!(map.resolve(KeyScope::Form, &key(KeyCode::Char('q'))), None);
        assert_eq!(
            map.resolve(KeyScope::Form, &ctrl('t')),
            Some(Action::ToggleTheme)
        );
    }

    #[test]
    fn test_confirm_scope_does_not_fall_through() {
        let map = KeyMap::default();
        assert_eq!(map.resolve(KeyScope::Confirm, &ctrl('t')), None);
        assert_eq!(
            map.resolve(KeyScope::Confirm, &key(KeyCode::Esc)),
            Some(Action::Cancel)
        );
    }

    #[test]
    fn test_shift_ignored_for_chars() {
        let map = KeyMap::default();
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(
            map.resolve(KeyScope::Table, &event),
            Some(Action::SelectLast)
        );
    }

    #[test]
    fn test_override_replaces_default_global_binding() {
        let mut map = KeyMap::default();
        let overrides = HashMap::from([("F2".to_string(), Action::ToggleTheme)]);

        let errors = map.apply_overrides(&overrides);

        assert!(errors.is_empty());
        assert_eq!(
            map.resolve(KeyScope::Form, &key(KeyCode::F(2))),
            Some(Action::ToggleTheme)
        );
        assert_eq!(map.resolve(KeyScope::Form, &ctrl('t')), None);
    }

    #[test]
    fn test_plain_char_override_binds_to_table_only() {
        let mut map = KeyMap::default();
        let overrides = HashMap::from([("x".to_string(), Action::Quit)]);

        map.apply_overrides(&overrides);

        assert_eq!(map.resolve(KeyScope::Form, &key(KeyCode::Char('x'))), None);
        assert_eq!(
            map.resolve(KeyScope::Table, &key(KeyCode::Char('x'))),
            Some(Action::Quit)
        );
        assert_eq!(map.resolve(KeyScope::Table, &key(KeyCode::Char('q'))), None);
        assert_eq!(map.resolve(KeyScope::Form, &ctrl('c')), Some(Action::Quit));
    }

    #[test]
    fn test_override_reports_bad_keys() {
        let mut map = KeyMap::default();
        let overrides = HashMap::from([("Super+x".to_string(), Action::Quit)]);

        let errors = map.apply_overrides(&overrides);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "Super+x");
    }
}
