//! Segmented code entry: a fixed row of one-character slots, as used for
//! verification codes. Typing fills the focused slot and advances, paste
//! fills left to right, and filling the last empty slot reports the complete
//! code.

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;

/// Display width of one rendered slot: `[x]` plus a trailing gap.
const SLOT_COLS: u16 = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodeInputAction {
    None,
    Redraw,
    Completed(String),
}

#[derive(Clone, Debug)]
pub struct CodeInputOptions {
    pub fields: usize,
    pub style: Style,
}

impl Default for CodeInputOptions {
    fn default() -> Self {
        Self {
            fields: 4,
            style: Style::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CodeInput {
    slots: Vec<Option<char>>,
    focus: usize,
    options: CodeInputOptions,
    last_area: Option<Rect>,
}

impl Default for CodeInput {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeInput {
    pub fn new() -> Self {
        Self::with_options(CodeInputOptions::default())
    }

    pub fn with_options(options: CodeInputOptions) -> Self {
        let fields = options.fields.max(1);
        Self {
            slots: vec![None; fields],
            focus: 0,
            options,
            last_area: None,
        }
    }

    pub fn fields(&self) -> usize {
        self.slots.len()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Characters entered so far, in slot order, skipping empty slots.
    pub fn code(&self) -> String {
        self.slots.iter().filter_map(|s| *s).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.focus = 0;
    }

    pub fn handle_event(&mut self, event: InputEvent) -> CodeInputAction {
        match event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Char(c) => self.type_char(c),
                KeyCode::Backspace => self.backspace(),
                KeyCode::Left => self.move_focus(-1),
                KeyCode::Right => self.move_focus(1),
                _ => CodeInputAction::None,
            },
            InputEvent::Paste(text) => self.paste(&text),
            InputEvent::Mouse(MouseEvent {
                x,
                y,
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => self.click(x, y),
            _ => CodeInputAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.last_area = None;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        for (i, slot) in self.slots.iter().enumerate() {
            let x = area.x + i as u16 * SLOT_COLS;
            if x + 3 > area.x + area.width {
                break;
            }
            let style = if i == self.focus {
                theme.accent
            } else {
                base_style
            };
            let ch = slot.unwrap_or(' ');
            buf.set_stringn(x, area.y, format!("[{ch}]"), 3, style);
        }

        self.last_area = Some(area);
    }

    fn type_char(&mut self, c: char) -> CodeInputAction {
        if !c.is_ascii_alphanumeric() {
            return CodeInputAction::None;
        }
        self.slots[self.focus] = Some(c);
        if self.focus + 1 < self.slots.len() {
            self.focus += 1;
        }
        self.completion_or_redraw()
    }

    fn backspace(&mut self) -> CodeInputAction {
        if self.slots[self.focus].is_some() {
            self.slots[self.focus] = None;
            return CodeInputAction::Redraw;
        }
        if self.focus > 0 {
            self.focus -= 1;
            self.slots[self.focus] = None;
            return CodeInputAction::Redraw;
        }
        CodeInputAction::None
    }

    fn move_focus(&mut self, delta: i32) -> CodeInputAction {
        let next = (self.focus as i64 + delta as i64)
            .clamp(0, self.slots.len() as i64 - 1) as usize;
        if next == self.focus {
            return CodeInputAction::None;
        }
        self.focus = next;
        CodeInputAction::Redraw
    }

    fn paste(&mut self, text: &str) -> CodeInputAction {
        let chars: Vec<char> = text.trim().chars().take(self.slots.len()).collect();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = chars.get(i).copied();
        }
        if !chars.is_empty() {
            self.focus = (chars.len() - 1).min(self.slots.len() - 1);
        }
        self.completion_or_redraw()
    }

    fn click(&mut self, x: u16, y: u16) -> CodeInputAction {
        let Some(area) = self.last_area else {
            return CodeInputAction::None;
        };
        if !area.contains(Position::new(x, y)) {
            return CodeInputAction::None;
        }
        let slot = ((x - area.x) / SLOT_COLS) as usize;
        if slot >= self.slots.len() || slot == self.focus {
            return CodeInputAction::None;
        }
        self.focus = slot;
        CodeInputAction::Redraw
    }

    fn completion_or_redraw(&self) -> CodeInputAction {
        if self.is_complete() {
            CodeInputAction::Completed(self.code())
        } else {
            CodeInputAction::Redraw
        }
    }
}
