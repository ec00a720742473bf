//! Type-safe key bindings shared by the input and searcher components.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Components expose their bindings through a
//! keymap struct implementing [`KeyMap`], so applications can remap keys or
//! render help for them.
//!
//! ```rust
//! use searcher_widgets::key::{matches_binding, Binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Down]).with_help("↓", "next result");
//! let msg = KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &next));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl From<&str> for KeyPress {
    /// Parses strings such as `"enter"`, `"ctrl+h"` or `"alt+backspace"`.
    ///
    /// Unknown key names parse to [`KeyCode::Null`], which never matches a
    /// real key event.
    fn from(s: &str) -> Self {
        parse_key_str(s)
    }
}

fn parse_key_str(s: &str) -> KeyPress {
    let mut mods = KeyModifiers::NONE;
    let mut parts: Vec<&str> = s.split('+').collect();
    // "ctrl++" style strings bind the plus key itself
    if s.ends_with("++") {
        parts.retain(|p| !p.is_empty());
        parts.push("+");
    }
    let key_part = parts.pop().unwrap_or_default();

    for m in parts {
        match m.to_ascii_lowercase().as_str() {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            _ => {}
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdown" | "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => KeyCode::Null,
            }
        }
    };

    KeyPress { code, mods }
}

/// Help text for a binding: the key label and a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Label for the keys, e.g. `"↑/ctrl+p"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible to [`KeyPress`].
    ///
    /// ```rust
    /// use searcher_widgets::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let b = Binding::new(vec![KeyCode::Up]);
    /// let c = Binding::new(vec!["ctrl+p", "up"]);
    /// let d = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);
    /// assert_eq!(b.keys().len(), 1);
    /// assert_eq!(c.keys().len(), 2);
    /// assert_eq!(d.keys().len(), 1);
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the bound key presses.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the bound key presses.
    pub fn set_keys<K: Into<KeyPress>>(&mut self, keys: Vec<K>) {
        self.keys = keys.into_iter().map(Into::into).collect();
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether a key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.mods == msg.modifiers)
    }
}

/// Options accepted by [`new_binding`].
pub enum BindingOpt {
    /// Keys given as strings.
    Keys(Vec<KeyPress>),
    /// Help label and description.
    Help(String, String),
    /// Starts the binding disabled.
    Disabled,
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => b.keys = keys,
            BindingOpt::Help(key, desc) => b.help = Help { key, desc },
            BindingOpt::Disabled => b.disabled = true,
        }
    }
    b
}

/// Key option from string descriptions such as `"ctrl+h"`.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().map(|k| KeyPress::from(*k)).collect())
}

/// Help option.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(key.to_string(), desc.to_string())
}

/// Disabled option.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

/// Reports whether `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether `msg` triggers any of `bindings`.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Keymaps that can describe their bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
