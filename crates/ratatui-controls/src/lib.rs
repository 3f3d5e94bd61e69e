//! `ratatui-controls` provides small, encapsulated form and navigation
//! widgets for terminal UIs.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - Host-owned content: the slide collection (and its count) is passed into
//!   every call, so widgets never hold a stale length.
//! - No async runtime: all widgets run on the main thread; every operation
//!   is synchronous and runs to completion.
//!
//! ## Widgets
//!
//! - [`carousel::Carousel`]: slide carousel with a pointer strategy
//!   (previous/next controls over an index) and a touch strategy
//!   (snap-aligned scrolling, no controls), chosen once at mount via
//!   [`pointer::PointerQuery`].
//! - [`stepper::NumberStepper`]: numeric value with step/min/max and
//!   increment/decrement controls.
//! - [`code_input::CodeInput`]: segmented one-char-per-slot code entry with
//!   paste fill and a completion signal.
//!
//! ## Input
//!
//! Widgets consume the library-neutral events in [`input`]. With the
//! `crossterm` feature, [`crossterm_input`] converts crossterm events and
//! offers [`crossterm_input::MouseCaptureGuard`] for scoped mouse capture.

pub mod theme;

pub mod input;
pub mod keymap;
pub mod render;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod pointer;

pub mod carousel;
pub mod code_input;
pub mod stepper;
