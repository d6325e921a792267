//! Main application state and event loop

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::{
    input_utils,
    todo::TodoStore,
    ui::{self, Focus, RenderState},
    voice::{CommandInterpreter, SpeechClient, VoiceCapture},
};

/// Messages that can be sent to the app from background tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A newly transcribed speech segment
    TranscriptChunk(String),
    /// Voice capture or transcription error
    VoiceError(String),
}

/// Application state
pub struct App {
    /// Terminal handle
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Language hint passed to transcription
    language: String,
    /// The to-do collection
    store: TodoStore,
    /// Watches the transcript for the trigger phrase
    interpreter: CommandInterpreter,
    /// Accumulated speech since the last dispatch
    transcript: String,
    /// Current input text
    input: String,
    /// Input cursor position
    cursor_position: usize,
    /// Which pane has keyboard focus
    focus: Focus,
    /// Selected item index in the list pane
    selected: usize,
    /// Voice capture handle
    capture: VoiceCapture,
    /// App message receiver
    message_rx: mpsc::Receiver<AppMessage>,
    /// Should quit
    should_quit: bool,
    /// Status message
    status_message: Option<String>,
}

impl App {
    pub fn new(language: String, trigger: String) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create message channel
        let (message_tx, message_rx) = mpsc::channel(100);

        let capture = VoiceCapture::new(message_tx);

        Ok(Self {
            terminal,
            language,
            store: TodoStore::new(),
            interpreter: CommandInterpreter::new(trigger),
            transcript: String::new(),
            input: String::new(),
            cursor_position: 0,
            focus: Focus::Input,
            selected: 0,
            capture,
            message_rx,
            should_quit: false,
            status_message: None,
        })
    }

    /// Main event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            // Draw UI
            self.draw()?;

            // Handle events with timeout
            tokio::select! {
                // Check for terminal events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            self.handle_key_event(key)?;
                        }
                    }
                }

                // Check for app messages
                Some(msg) = self.message_rx.recv() => {
                    self.handle_app_message(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Cleanup
        self.cleanup()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        // Extract state for rendering
        let state = RenderState {
            items: self.store.items(),
            selected: self.selected,
            focus: self.focus,
            listening: self.capture.is_listening(),
            input: &self.input,
            cursor_position: self.cursor_position,
            transcript: &self.transcript,
            trigger: self.interpreter.trigger(),
            status_message: self.status_message.as_deref(),
            completed: self.store.completed(),
        };

        self.terminal.draw(|frame| {
            ui::draw(frame, &state);
        })?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Global bindings first
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('q')) => {
                self.should_quit = true;
                return Ok(());
            }
            (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                self.toggle_listening();
                return Ok(());
            }
            (_, KeyCode::Tab) => {
                self.focus = match self.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
                return Ok(());
            }
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_list_key(key),
        }
        Ok(())
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            // Submit input
            (_, KeyCode::Enter) => {
                self.submit_input();
            }
            // Word/line editing
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                let (input, pos) = input_utils::delete_word_backward(&self.input, self.cursor_position);
                self.input = input;
                self.cursor_position = pos;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.input = input_utils::delete_to_start(&self.input, self.cursor_position);
                self.cursor_position = 0;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('k')) => {
                self.input = input_utils::delete_to_end(&self.input, self.cursor_position);
            }
            // Character input
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.input.insert(self.cursor_position, c);
                self.cursor_position += c.len_utf8();
            }
            // Backspace
            (_, KeyCode::Backspace) => {
                if self.cursor_position > 0 {
                    let prev = input_utils::prev_char_boundary(&self.input, self.cursor_position);
                    self.input.drain(prev..self.cursor_position);
                    self.cursor_position = prev;
                }
            }
            // Delete
            (_, KeyCode::Delete) => {
                if self.cursor_position < self.input.len() {
                    self.input.remove(self.cursor_position);
                }
            }
            // Cursor movement
            (_, KeyCode::Left) => {
                if self.cursor_position > 0 {
                    self.cursor_position =
                        input_utils::prev_char_boundary(&self.input, self.cursor_position);
                }
            }
            (_, KeyCode::Right) => {
                if self.cursor_position < self.input.len() {
                    self.cursor_position =
                        input_utils::next_char_boundary(&self.input, self.cursor_position);
                }
            }
            (_, KeyCode::Home) => {
                self.cursor_position = 0;
            }
            (_, KeyCode::End) => {
                self.cursor_position = self.input.len();
            }
            // Clear input
            (_, KeyCode::Esc) => {
                self.input.clear();
                self.cursor_position = 0;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !self.store.is_empty() {
                    self.selected = (self.selected + 1).min(self.store.len() - 1);
                }
            }
            // Toggle completion of the selected item
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(id) = self.store.items().get(self.selected).map(|item| item.id) {
                    self.store.toggle(id);
                }
            }
            KeyCode::Esc => {
                self.focus = Focus::Input;
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        self.cursor_position = 0;

        // Empty input is a silent no-op, same as the voice path
        if let Some(item) = self.store.create(&input) {
            self.status_message = Some(format!("Added \"{}\"", item.text));
        }
    }

    fn toggle_listening(&mut self) {
        if self.capture.is_listening() {
            self.capture.stop();
            self.status_message = Some("Stopped listening".to_string());
            return;
        }

        match SpeechClient::from_env(&self.language) {
            Ok(client) => match self.capture.start(client) {
                Ok(()) => {
                    self.status_message = Some(format!(
                        "Listening... say \"{} <item>\"",
                        self.interpreter.trigger()
                    ));
                }
                Err(e) => {
                    self.status_message = Some(format!("Voice error: {}", e));
                }
            },
            Err(e) => {
                self.status_message = Some(format!("Voice error: {}", e));
            }
        }
    }

    fn handle_app_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::TranscriptChunk(text) => {
                tracing::debug!("Transcript chunk: {}", text);
                if !self.transcript.is_empty() {
                    self.transcript.push(' ');
                }
                self.transcript.push_str(&text);

                // One atomic step: extract, create, reset
                if let Some(id) = self
                    .interpreter
                    .dispatch(&mut self.transcript, &mut self.store)
                {
                    if let Some(item) = self.store.items().iter().find(|item| item.id == id) {
                        self.status_message = Some(format!("Added \"{}\"", item.text));
                    }
                }
            }
            AppMessage::VoiceError(err) => {
                self.status_message = Some(format!("Voice error: {}", err));
            }
        }
    }

    fn cleanup(&mut self) -> Result<()> {
        self.capture.stop();

        // Restore terminal
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
