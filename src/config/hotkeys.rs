//! Key bindings per input mode.
//!
//! Bindings are stored in the config file as readable key strings (`j`,
//! `Space`, `Ctrl+s`) and matched against `crossterm` key events.

use super::ConfigError;
use crate::state::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fmt,
    str::FromStr,
};

/// Things a key can be bound to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Task list
    NavigateNext,
    NavigatePrev,
    ToggleComplete,
    EditTask,
    DeleteTask,
    FocusAddForm,
    NextFilter,
    PrevFilter,
    ShowAll,
    ShowActive,
    ShowCompleted,
    ToggleLog,
    Quit,

    // Add form and edit row
    NextField,
    Submit,
    Cancel,
}

/// A key plus the modifiers that must be held with it.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys accepted in the config file besides single characters.
const NAMED_KEYS: [(&str, KeyCode); 11] = [
    ("Space", KeyCode::Char(' ')),
    ("Esc", KeyCode::Esc),
    ("Enter", KeyCode::Enter),
    ("Tab", KeyCode::Tab),
    ("BackTab", KeyCode::BackTab),
    ("Backspace", KeyCode::Backspace),
    ("Del", KeyCode::Delete),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
];

const MODIFIER_NAMES: [(&str, KeyModifiers); 3] = [
    ("Ctrl", KeyModifiers::CONTROL),
    ("Shift", KeyModifiers::SHIFT),
    ("Alt", KeyModifiers::ALT),
];

impl Hotkey {
    fn key(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn char(c: char) -> Self {
        Hotkey::key(KeyCode::Char(c))
    }

    /// Whether the key event triggers this binding. Shift is ignored for
    /// characters and back tab since the key itself carries it.
    ///
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let significant = |code: KeyCode, modifiers: KeyModifiers| match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers.difference(KeyModifiers::SHIFT),
            _ => modifiers,
        };
        event.code == self.code
            && significant(event.code, event.modifiers) == significant(self.code, self.modifiers)
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, modifier) in MODIFIER_NAMES {
            if self.modifiers.contains(modifier) {
                write!(f, "{}+", name)?;
            }
        }
        match NAMED_KEYS.iter().find(|(_, code)| *code == self.code) {
            Some((name, _)) => write!(f, "{}", name),
            None => match self.code {
                KeyCode::Char(c) => write!(f, "{}", c),
                _ => write!(f, "Unknown"),
            },
        }
    }
}

impl FromStr for Hotkey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidHotkey(s.to_string());
        // A lone `+` or a binding ending in `++` names the plus key itself
        let (prefix, key) = if s == "+" {
            ("", "+")
        } else if let Some(prefix) = s.strip_suffix("++") {
            (prefix, "+")
        } else {
            s.rsplit_once('+').unwrap_or(("", s))
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.split('+').filter(|part| !part.is_empty()) {
            let (_, modifier) = MODIFIER_NAMES
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))
                .ok_or_else(invalid)?;
            modifiers |= *modifier;
        }

        let mut chars = key.chars();
        let code = match (chars.next(), chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => NAMED_KEYS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, code)| *code)
                .ok_or_else(invalid)?,
        };
        // Terminals report Shift+Tab as its own key
        if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
            return Ok(Hotkey {
                code: KeyCode::BackTab,
                modifiers: modifiers.difference(KeyModifiers::SHIFT),
            });
        }
        Ok(Hotkey { code, modifiers })
    }
}

impl TryFrom<String> for Hotkey {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hotkey> for String {
    fn from(hotkey: Hotkey) -> Self {
        hotkey.to_string()
    }
}

/// Maps hotkey actions to their key bindings for each input mode.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeHotkeys {
    #[serde(default = "default_task_list")]
    pub task_list: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_form")]
    pub add_form: HashMap<HotkeyAction, Hotkey>,
    #[serde(default = "default_form")]
    pub edit_task: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ModeHotkeys {
    fn default() -> Self {
        ModeHotkeys {
            task_list: default_task_list(),
            add_form: default_form(),
            edit_task: default_form(),
        }
    }
}

impl ModeHotkeys {
    /// Return the bindings of the given mode.
    ///
    pub fn for_mode(&self, mode: Mode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            Mode::TaskList => &self.task_list,
            Mode::AddForm => &self.add_form,
            Mode::EditTask => &self.edit_task,
        }
    }

    /// Fail if two actions of one mode are bound to the same key.
    ///
    pub fn check_unique(&self) -> Result<(), ConfigError> {
        for (mode, bindings) in [
            ("task_list", &self.task_list),
            ("add_form", &self.add_form),
            ("edit_task", &self.edit_task),
        ] {
            let mut seen = HashSet::new();
            for hotkey in bindings.values() {
                if !seen.insert(hotkey) {
                    return Err(ConfigError::DuplicateHotkey {
                        mode: mode.to_string(),
                        key: hotkey.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn default_task_list() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::NavigateNext, Hotkey::char('j')),
        (HotkeyAction::NavigatePrev, Hotkey::char('k')),
        (HotkeyAction::ToggleComplete, Hotkey::char(' ')),
        (HotkeyAction::EditTask, Hotkey::char('e')),
        (HotkeyAction::DeleteTask, Hotkey::char('d')),
        (HotkeyAction::FocusAddForm, Hotkey::char('a')),
        (HotkeyAction::NextFilter, Hotkey::char('l')),
        (HotkeyAction::PrevFilter, Hotkey::char('h')),
        (HotkeyAction::ShowAll, Hotkey::char('1')),
        (HotkeyAction::ShowActive, Hotkey::char('2')),
        (HotkeyAction::ShowCompleted, Hotkey::char('3')),
        (HotkeyAction::ToggleLog, Hotkey::char('L')),
        (HotkeyAction::Quit, Hotkey::char('q')),
    ])
}

fn default_form() -> HashMap<HotkeyAction, Hotkey> {
    HashMap::from([
        (HotkeyAction::NextField, Hotkey::key(KeyCode::Tab)),
        (HotkeyAction::Submit, Hotkey::key(KeyCode::Enter)),
        (HotkeyAction::Cancel, Hotkey::key(KeyCode::Esc)),
    ])
}

/// Look up the action bound to the key event in the given mode.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    mode: Mode,
    hotkeys: &ModeHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| hotkey.matches(event))
        .map(|(action, _)| *action)
}

/// Builds the footer hint text. Each entry is an action, its description and
/// an optional second action shown as `key/key` before the description.
/// Unbound actions are left out.
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    actions
        .iter()
        .filter_map(|(action, description, paired)| {
            let hotkey = hotkeys.get(action)?;
            let keys = match paired.and_then(|paired| hotkeys.get(&paired)) {
                Some(paired_hotkey) => format!("{}/{}", hotkey, paired_hotkey),
                None => hotkey.to_string(),
            };
            Some(format!(" {}: {}", keys, description))
        })
        .collect::<Vec<_>>()
        .join(",")
}
