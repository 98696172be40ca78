//! Type-safe key bindings for browse-widgets components.
//!
//! A `Binding` couples one or more key presses with help text. Component key
//! maps are plain structs of bindings implementing the [`KeyMap`] trait so
//! that help views can enumerate them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held with it.
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

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Display label for the key(s), e.g. "←/h".
    pub key: String,
    /// Short action description, e.g. "prev page".
    pub desc: String,
}

/// A key binding with associated help information.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::key::Binding;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
/// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
///     .with_help("ctrl+s", "save");
/// assert_eq!(confirm.help.desc, "confirm");
/// ```
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key presses that trigger this binding.
    pub keys: Vec<KeyPress>,
    /// Help text shown in help views.
    pub help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from a list of key presses.
    pub fn new<T: Into<KeyPress>>(keys: Vec<T>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns whether this binding is active.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the given key message triggers this binding.
    ///
    /// A binding declared without modifiers also matches a shifted
    /// character, since crossterm reports uppercase chars with SHIFT set.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|kp| {
            if kp.code != msg.key {
                return false;
            }
            if kp.mods == msg.modifiers {
                return true;
            }
            kp.mods == KeyModifiers::NONE
                && msg.modifiers == KeyModifiers::SHIFT
                && matches!(msg.key, KeyCode::Char(_))
        })
    }
}

/// Construction option for [`new_binding`].
#[derive(Debug, Clone)]
pub enum BindingOpt {
    /// Key presses for the binding.
    Keys(Vec<KeyPress>),
    /// Help text for the binding.
    Help(Help),
    /// Start the binding disabled.
    Disabled,
}

/// Creates a binding from a list of options, Go-bubbles style.
///
/// # Examples
///
/// ```rust
/// use browse_widgets::key::{new_binding, with_keys_str, with_help};
///
/// let quit = new_binding(vec![
///     with_keys_str(&["q", "ctrl+c"]),
///     with_help("q", "quit"),
/// ]);
/// assert!(quit.enabled());
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::new::<KeyPress>(vec![]);
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::Help(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Option: set the binding's keys from explicit key presses.
pub fn with_keys<T: Into<KeyPress>>(keys: Vec<T>) -> BindingOpt {
    BindingOpt::Keys(keys.into_iter().map(Into::into).collect())
}

/// Option: set the binding's keys from string descriptions.
///
/// Accepts names like `"enter"`, `"esc"`, `"left"`, `"pgup"`, single
/// characters, and modifier prefixes like `"ctrl+c"` or `"alt+enter"`.
/// Unrecognized strings are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_key(s)).collect())
}

/// Option: set the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::Help(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Option: create the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        let Some((prefix, tail)) = rest.split_once('+') else {
            break;
        };
        match prefix {
            "ctrl" => mods |= KeyModifiers::CONTROL,
            "alt" => mods |= KeyModifiers::ALT,
            "shift" => mods |= KeyModifiers::SHIFT,
            _ => return None,
        }
        rest = tail;
    }
    let code = match rest {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        other => {
            let mut chars = other.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(KeyPress { code, mods })
}

/// Reports whether a key message matches any of the given bindings.
pub fn matches<'a>(msg: &KeyMsg, bindings: impl IntoIterator<Item = &'a Binding>) -> bool {
    bindings.into_iter().any(|b| b.matches(msg))
}

/// Reports whether a key message matches a single binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Trait implemented by component key maps so help views can list them.
pub trait KeyMap {
    /// Bindings for the compact help line.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
