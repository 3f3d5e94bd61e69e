//! Numeric stepper: a value with increment/decrement controls and optional
//! min/max bounds. Typed digits edit a text buffer that commits (and clamps)
//! on every edit; stepping rounds to the step's decimal precision to keep
//! float noise out of the displayed value.

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepperAction {
    None,
    Redraw,
    Changed(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepperAffordances {
    pub decrement_enabled: bool,
    pub increment_enabled: bool,
}

#[derive(Clone, Debug)]
pub struct StepperOptions {
    pub step: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub read_only: bool,
    pub style: Style,
}

impl Default for StepperOptions {
    fn default() -> Self {
        Self {
            step: 1.0,
            min: None,
            max: None,
            read_only: false,
            style: Style::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NumberStepper {
    value: f64,
    edit: String,
    options: StepperOptions,
    dec_zone: Option<Rect>,
    inc_zone: Option<Rect>,
}

impl Default for NumberStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberStepper {
    pub fn new() -> Self {
        Self::with_options(StepperOptions::default())
    }

    pub fn with_options(options: StepperOptions) -> Self {
        let mut s = Self {
            value: 0.0,
            edit: String::new(),
            options,
            dec_zone: None,
            inc_zone: None,
        };
        s.value = s.clamp(s.value);
        s
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = self.clamp(value);
        self.edit.clear();
    }

    pub fn options(&self) -> &StepperOptions {
        &self.options
    }

    pub fn affordances(&self) -> StepperAffordances {
        StepperAffordances {
            decrement_enabled: self.options.min.is_none_or(|min| self.value > min),
            increment_enabled: self.options.max.is_none_or(|max| self.value < max),
        }
    }

    pub fn increment(&mut self) -> StepperAction {
        self.step_by(self.step())
    }

    pub fn decrement(&mut self) -> StepperAction {
        self.step_by(-self.step())
    }

    pub fn handle_event(&mut self, event: InputEvent) -> StepperAction {
        match event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Up => self.increment(),
                KeyCode::Down => self.decrement(),
                KeyCode::Char(c) => self.edit_char(c),
                KeyCode::Backspace => self.edit_backspace(),
                KeyCode::Delete => self.edit_clear(),
                _ => StepperAction::None,
            },
            InputEvent::Mouse(MouseEvent {
                x,
                y,
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                let at = Position::new(x, y);
                if self.dec_zone.is_some_and(|z| z.contains(at)) {
                    return self.decrement();
                }
                if self.inc_zone.is_some_and(|z| z.contains(at)) {
                    return self.increment();
                }
                StepperAction::None
            }
            _ => StepperAction::None,
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        self.dec_zone = None;
        self.inc_zone = None;
        if area.width < 3 || area.height == 0 {
            return;
        }

        let dec_zone = Rect::new(area.x, area.y, 1, area.height);
        let inc_zone = Rect::new(area.x + area.width - 1, area.y, 1, area.height);
        let value_area = Rect::new(area.x + 1, area.y, area.width - 2, area.height);

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        let state = self.affordances();
        let dec_style = if state.decrement_enabled {
            theme.control
        } else {
            theme.control_disabled
        };
        let inc_style = if state.increment_enabled {
            theme.control
        } else {
            theme.control_disabled
        };

        render::render_str_centered(dec_zone, buf, "-", dec_style);
        render::render_str_centered(inc_zone, buf, "+", inc_style);
        render::render_str_centered(value_area, buf, &self.display(), base_style);

        self.dec_zone = Some(dec_zone);
        self.inc_zone = Some(inc_zone);
    }

    fn display(&self) -> String {
        if self.edit.is_empty() {
            format!("{}", self.value)
        } else {
            self.edit.clone()
        }
    }

    fn step_by(&mut self, delta: f64) -> StepperAction {
        self.edit.clear();
        let next = self.clamp(fix_decimals(self.value + delta, step_decimals(self.step())));
        if next == self.value {
            return StepperAction::None;
        }
        self.value = next;
        StepperAction::Changed(self.value)
    }

    fn edit_char(&mut self, c: char) -> StepperAction {
        if self.options.read_only {
            return StepperAction::None;
        }
        if !(c.is_ascii_digit() || c == '-' || c == '.') {
            return StepperAction::None;
        }
        self.edit.push(c);
        self.commit_edit()
    }

    fn edit_backspace(&mut self) -> StepperAction {
        if self.options.read_only || self.edit.is_empty() {
            return StepperAction::None;
        }
        self.edit.pop();
        if self.edit.is_empty() {
            return StepperAction::Redraw;
        }
        self.commit_edit()
    }

    fn edit_clear(&mut self) -> StepperAction {
        if self.options.read_only || self.edit.is_empty() {
            return StepperAction::None;
        }
        self.edit.clear();
        StepperAction::Redraw
    }

    /// A partial entry like `-` or `1.` stays in the buffer without touching
    /// the committed value.
    fn commit_edit(&mut self) -> StepperAction {
        let Ok(parsed) = self.edit.parse::<f64>() else {
            return StepperAction::Redraw;
        };
        let next = self.clamp(parsed);
        if next != parsed {
            self.edit = format!("{next}");
        }
        if next == self.value {
            return StepperAction::Redraw;
        }
        self.value = next;
        StepperAction::Changed(self.value)
    }

    fn step(&self) -> f64 {
        if self.options.step.is_finite() && self.options.step != 0.0 {
            self.options.step
        } else {
            1.0
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(max) = self.options.max {
            v = v.min(max);
        }
        if let Some(min) = self.options.min {
            v = v.max(min);
        }
        v
    }
}

fn step_decimals(step: f64) -> u32 {
    let s = format!("{step}");
    s.split('.').nth(1).map(|d| d.len() as u32).unwrap_or(0)
}

fn fix_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
