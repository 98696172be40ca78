//! A debounced search input for bubbletea-rs content browsers.
//!
//! The model keeps two values: a live buffer updated on every keystroke (so
//! the input always feels responsive) and a committed query, which is what
//! filtering should actually run against. Commits happen on the trailing
//! edge of a quiet period (default 300 ms), immediately on explicit submit,
//! and immediately when the buffer is cleared so that "clear filter" never
//! lags.
//!
//! Debouncing uses the same id/tag message filtering as the timer
//! components: every edit bumps an internal tag and schedules a
//! [`DebounceMsg`] carrying it; a message arriving with a stale tag is
//! rejected, so only the timer belonging to the most recent keystroke ever
//! commits. Blurring the input bumps the tag too, which guarantees a
//! pending commit can never fire against a torn-down view.
//!
//! # Examples
//!
//! ```rust
//! use browse_widgets::search::{Model, QueryMsg};
//! use browse_widgets::Component;
//!
//! let mut search = Model::new().with_placeholder("Search posts…");
//! search.focus();
//! assert_eq!(search.committed(), "");
//! ```

use crate::key::{self, KeyMap as KeyMapTrait};
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// The default quiet period before a buffered query is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Message delivered when a debounce timer fires.
///
/// Carries the tag current at scheduling time; the model rejects it if
/// another edit happened since.
#[derive(Debug, Clone)]
pub struct DebounceMsg {
    /// The id of the search input that scheduled this timer.
    pub id: i64,
    tag: i64,
}

/// Message emitted whenever a query is committed.
///
/// The owning model should apply the query to its filter and reset its
/// pagination position when it sees this.
#[derive(Debug, Clone)]
pub struct QueryMsg {
    /// The id of the search input that committed.
    pub id: i64,
    /// The committed query text.
    pub query: String,
}

/// Key bindings for the search input.
#[derive(Debug, Clone)]
pub struct SearchKeyMap {
    /// Commit the buffer immediately. Default: Enter.
    pub submit: key::Binding,
    /// Clear the buffer and commit the empty query. Default: Esc.
    pub clear: key::Binding,
}

impl Default for SearchKeyMap {
    fn default() -> Self {
        Self {
            submit: key::new_binding(vec![
                key::with_keys_str(&["enter"]),
                key::with_help("enter", "search"),
            ]),
            clear: key::new_binding(vec![
                key::with_keys_str(&["esc"]),
                key::with_help("esc", "clear"),
            ]),
        }
    }
}

impl KeyMapTrait for SearchKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.submit, &self.clear]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.submit, &self.clear]]
    }
}

/// Styles for the search input.
#[derive(Debug, Clone)]
pub struct SearchStyles {
    /// Style for the prompt prefix.
    pub prompt: Style,
    /// Style for the typed text.
    pub text: Style,
    /// Style for the placeholder shown when the buffer is empty.
    pub placeholder: Style,
}

impl Default for SearchStyles {
    fn default() -> Self {
        Self {
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            text: Style::new(),
            placeholder: Style::new().foreground(Color::from("240")),
        }
    }
}

/// A debounced single-line search input model.
pub struct Model {
    /// The prompt displayed before the input text.
    pub prompt: String,
    /// Placeholder text shown while the buffer is empty.
    pub placeholder: String,
    /// Quiet period before the buffer is committed.
    pub debounce: Duration,
    /// Rendering styles.
    pub styles: SearchStyles,
    /// Key bindings.
    pub keymap: SearchKeyMap,

    value: Vec<char>,
    pos: usize,
    committed: String,
    focus: bool,
    id: i64,
    tag: i64,
}

/// Creates a new search input with default settings.
///
/// The input starts blurred; call [`Component::focus`] to route key events
/// to it.
pub fn new() -> Model {
    Model {
        prompt: "/ ".to_string(),
        placeholder: String::new(),
        debounce: DEFAULT_DEBOUNCE,
        styles: SearchStyles::default(),
        keymap: SearchKeyMap::default(),
        value: Vec::new(),
        pos: 0,
        committed: String::new(),
        focus: false,
        id: next_id(),
        tag: 0,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl Model {
    /// Creates a new search input with default settings.
    pub fn new() -> Self {
        new()
    }

    /// Sets the quiet period (builder pattern).
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Sets the placeholder text (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the prompt prefix (builder pattern).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// This input's unique id, used to filter [`QueryMsg`]s when several
    /// search boxes coexist.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The live buffer contents.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// The last committed query.
    pub fn committed(&self) -> String {
        self.committed.clone()
    }

    /// Replaces the buffer contents without committing.
    pub fn set_value(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Clears the buffer and the committed query, invalidating any pending
    /// debounce timer.
    pub fn reset(&mut self) {
        self.value.clear();
        self.pos = 0;
        self.committed.clear();
        self.tag += 1;
    }

    /// Commits the buffer immediately, cancelling any pending timer.
    ///
    /// Returns a command emitting [`QueryMsg`], or `None` when the buffer
    /// already equals the committed query (nothing to announce).
    pub fn commit(&mut self) -> Option<Cmd> {
        // Any pending debounce tick is now stale.
        self.tag += 1;
        let query = self.value();
        if query == self.committed {
            return None;
        }
        self.committed = query.clone();
        let id = self.id;
        Some(bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(QueryMsg {
                id,
                query: query.clone(),
            }) as Msg
        }))
    }

    fn schedule_commit(&mut self) -> Option<Cmd> {
        self.tag += 1;
        let id = self.id;
        let tag = self.tag;
        let debounce = self.debounce;
        Some(bubbletea_tick(debounce, move |_| {
            Box::new(DebounceMsg { id, tag }) as Msg
        }))
    }

    /// Called after an edit: commits empty buffers immediately so clearing
    /// feels instantaneous, otherwise schedules a debounced commit.
    fn after_edit(&mut self) -> Option<Cmd> {
        if self.value.is_empty() {
            self.commit()
        } else {
            self.schedule_commit()
        }
    }

    /// Processes messages, returning follow-up commands.
    ///
    /// Handles [`DebounceMsg`] ticks regardless of focus (the quiet period
    /// may elapse after focus moved on) and key input only while focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(debounce_msg) = msg.downcast_ref::<DebounceMsg>() {
            if debounce_msg.id != self.id || debounce_msg.tag != self.tag {
                return None;
            }
            return self.commit();
        }

        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.submit.matches(key_msg) {
                return self.commit();
            }
            if self.keymap.clear.matches(key_msg) {
                self.value.clear();
                self.pos = 0;
                return self.commit();
            }
            match key_msg.key {
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.value.insert(self.pos, c);
                    self.pos += 1;
                    return self.after_edit();
                }
                KeyCode::Backspace => {
                    if self.pos > 0 {
                        self.pos -= 1;
                        self.value.remove(self.pos);
                        return self.after_edit();
                    }
                }
                KeyCode::Delete => {
                    if self.pos < self.value.len() {
                        self.value.remove(self.pos);
                        return self.after_edit();
                    }
                }
                KeyCode::Left => {
                    self.pos = self.pos.saturating_sub(1);
                }
                KeyCode::Right => {
                    self.pos = (self.pos + 1).min(self.value.len());
                }
                KeyCode::Home => {
                    self.pos = 0;
                }
                KeyCode::End => {
                    self.pos = self.value.len();
                }
                _ => {}
            }
        }
        None
    }

    /// Renders the search input as a string.
    pub fn view(&self) -> String {
        let prompt = self.styles.prompt.render(&self.prompt);
        if self.value.is_empty() && !self.placeholder.is_empty() {
            return format!("{}{}", prompt, self.styles.placeholder.render(&self.placeholder));
        }
        format!("{}{}", prompt, self.styles.text.render(&self.value()))
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    /// Blurs the input and invalidates any pending debounce timer, so a
    /// commit can never fire after the owning view moved on.
    fn blur(&mut self) {
        self.focus = false;
        self.tag += 1;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
