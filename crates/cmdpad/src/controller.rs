//! # Editor controller
//!
//! ## Overview
//!
//! An [EditorController] owns a [DocumentBuffer] and a [CommandHandler]. Each key is processed
//! start to finish before the next one is looked at:
//!
//! 1. The key is classified, and the matching buffer edit is applied.
//! 2. The buffer is re-rendered for display (see [EditorController::view]).
//! 3. The flattened text is checked for a trailing command token.
//! 4. If one is found, the token is removed from the buffer, the view is refreshed, and the
//!    handler gets called with the command and the remaining text.
//!
//! The handler runs synchronously inside [EditorController::handle_key], which holds a mutable
//! borrow of the controller for the duration. No further input can be processed until the
//! handler returns, however long it takes.
//!
//! Whatever the handler does with the text (forwarding it somewhere, switching focus, copying
//! it) is its own business. When that work fails, it's up to the caller to show the failure,
//! usually by calling [EditorController::reset] with a description of the error.
use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, trace};

use crate::commands::{self, CommandEvent};
use crate::config::EditorConfig;
use crate::editing::DocumentBuffer;
use crate::errors::EditorResult;
use crate::key::{KeyClass, TerminalKey};

/// Receives the commands detected by an [EditorController].
pub trait CommandHandler {
    /// Handle `event`, where `text` is the buffer contents with the command token removed.
    fn on_command(&mut self, event: CommandEvent, text: &str);
}

impl<F> CommandHandler for F
where
    F: FnMut(CommandEvent, &str),
{
    fn on_command(&mut self, event: CommandEvent, text: &str) {
        (self)(event, text)
    }
}

/// A handler that ignores every command.
impl CommandHandler for () {
    fn on_command(&mut self, _: CommandEvent, _: &str) {}
}

/// Maps keys onto edits of a [DocumentBuffer], and dispatches the commands typed into it.
pub struct EditorController<H: CommandHandler = ()> {
    buffer: DocumentBuffer,
    config: EditorConfig,
    handler: H,
    title: Option<String>,
    view: String,
}

impl<H: CommandHandler> EditorController<H> {
    /// Create a new editor with the default configuration.
    pub fn new(handler: H) -> Self {
        EditorController::with_config(EditorConfig::default(), handler)
    }

    /// Create a new editor using the given configuration.
    pub fn with_config(config: EditorConfig, handler: H) -> Self {
        let buffer = DocumentBuffer::new();
        let view = buffer.render_with_cursor(config.get_cursor_marker());

        EditorController { buffer, config, handler, title: None, view }
    }

    /// Attach a title for whoever draws this editor.
    pub fn with_title<T: Into<String>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title given to this editor, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The configuration this editor was created with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The buffer being edited.
    pub fn document(&self) -> &DocumentBuffer {
        &self.buffer
    }

    /// The registered command handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the registered command handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The current text, without any cursor marker.
    pub fn text(&self) -> String {
        self.buffer.flatten()
    }

    /// The rendered buffer: every line terminated by a newline, and a cursor marker in the
    /// active line.
    pub fn view(&self) -> &str {
        self.view.as_str()
    }

    fn refresh(&mut self) {
        self.view = self.buffer.render_with_cursor(self.config.get_cursor_marker());
    }

    fn edit(&mut self, class: KeyClass) {
        match class {
            KeyClass::Left => self.buffer.move_left(),
            KeyClass::Right => self.buffer.move_right(),
            KeyClass::Up => self.buffer.move_up(),
            KeyClass::Down => self.buffer.move_down(),
            KeyClass::Enter => self.buffer.split(),
            KeyClass::Tab => {
                for _ in 0..self.config.get_tab_width() {
                    self.buffer.add(' ');
                }
            },
            KeyClass::Char(c) => self.buffer.add(c),
            KeyClass::Backspace => self.buffer.remove(),
            KeyClass::Other => {},
        }
    }

    /// Re-render, then look for a command at the end of the text and dispatch it.
    fn step(&mut self) -> Option<CommandEvent> {
        self.refresh();

        let text = self.buffer.flatten();
        let (event, stripped) = commands::parse(&text)?;

        debug!(?event, "command typed");

        self.buffer.reset(stripped);
        self.refresh();
        self.handler.on_command(event, stripped);

        return Some(event);
    }

    /// Process a single key, and return the command it completed, if any.
    ///
    /// The handler has already been called by the time this returns.
    pub fn handle_key(&mut self, key: TerminalKey) -> Option<CommandEvent> {
        let class = key.class();

        if let KeyClass::Other = class {
            trace!(key = %key, "ignoring key");
        } else {
            trace!(key = %key, ?class, "handling key");
        }

        self.edit(class);

        return self.step();
    }

    /// Process a terminal key event. Key releases are ignored.
    pub fn handle_event(&mut self, event: KeyEvent) -> Option<CommandEvent> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        self.handle_key(event.into())
    }

    /// Insert pasted text at the cursor, and then check for a command once at the end.
    pub fn paste(&mut self, text: &str) -> Option<CommandEvent> {
        trace!(len = text.len(), "pasting text");

        self.buffer.insert_text(text);

        return self.step();
    }

    /// Type out a sequence of keys written in Vim-style notation (`"abc<Left><BS><CR>"`), and
    /// return every command that they completed, in order.
    pub fn feed(&mut self, keys: &str) -> EditorResult<Vec<CommandEvent>> {
        let keys = TerminalKey::from_macro_str(keys)?;
        let events = keys.into_iter().filter_map(|key| self.handle_key(key)).collect();

        Ok(events)
    }

    /// Dispatch `event` with the current text, as if its token had just been typed at the end.
    pub fn trigger(&mut self, event: CommandEvent) {
        let text = self.buffer.flatten();

        debug!(?event, "command triggered");

        self.buffer.reset(&text);
        self.refresh();
        self.handler.on_command(event, &text);
    }

    /// Like [EditorController::trigger], but with the command given by name (`"submit"` or
    /// `":submit"`).
    pub fn trigger_named(&mut self, name: &str) -> EditorResult<CommandEvent> {
        let event = name.parse::<CommandEvent>()?;

        self.trigger(event);

        Ok(event)
    }

    /// Replace the contents of the buffer, leaving the cursor at the end.
    ///
    /// The new contents are not checked for commands.
    pub fn reset(&mut self, text: &str) {
        debug!(len = text.len(), "resetting buffer");

        self.buffer.reset(text);
        self.refresh();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        debug!("clearing buffer");

        self.buffer.clear();
        self.refresh();
    }
}

impl Default for EditorController<()> {
    fn default() -> Self {
        EditorController::new(())
    }
}
