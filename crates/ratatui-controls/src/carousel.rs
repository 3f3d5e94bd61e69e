//! Slide carousel with two mutually exclusive rendering strategies.
//!
//! The slide collection is host-owned: the widget never stores slides or
//! their count. Every event and render call takes the current `count`, so
//! state is re-derived from the live collection instead of a cached length.
//!
//! The strategy is picked once at mount (see [`crate::pointer`]) and never
//! re-evaluated:
//!
//! - [`Strategy::Pointer`]: previous/next controls drive an explicit index;
//!   the slide strip is shifted left by `index * viewport_width` columns.
//! - [`Strategy::Touch`]: no controls and no index; a raw horizontal scroll
//!   offset settles on slide boundaries after every scroll event
//!   (snap-to-start, full-width slides).

use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::MouseButton;
use crate::input::MouseEvent;
use crate::input::MouseEventKind;
use crate::keymap;
use crate::pointer::PointerQuery;
use crate::pointer::Strategy;
use crate::pointer::select_strategy;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::layout::Rect;
use ratatui::style::Style;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    Redraw,
}

/// Enabled/disabled state of the two controls, derived from `(index, count)`
/// and never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordances {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Pure derivation: previous is enabled strictly past the first slide, next
/// strictly before the last. An empty collection disables both.
pub fn affordances(index: usize, count: usize) -> Affordances {
    Affordances {
        previous_enabled: index > 0,
        next_enabled: count > 0 && index + 1 < count,
    }
}

#[derive(Clone, Debug)]
pub struct CarouselBindings {
    pub previous: Vec<KeyEvent>,
    pub next: Vec<KeyEvent>,
}

impl Default for CarouselBindings {
    fn default() -> Self {
        Self {
            previous: vec![KeyEvent::new(KeyCode::Left), keymap::key_char('h')],
            next: vec![KeyEvent::new(KeyCode::Right), keymap::key_char('l')],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Nav {
    Previous,
    Next,
}

impl CarouselBindings {
    fn nav_for(&self, key: &KeyEvent) -> Option<Nav> {
        if self
            .previous
            .iter()
            .any(|p| keymap::key_event_matches(p, key))
        {
            return Some(Nav::Previous);
        }
        if self.next.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(Nav::Next);
        }
        None
    }
}

#[derive(Clone, Debug)]
pub struct CarouselOptions {
    /// Forces the Pointer strategy even on a coarse-pointer host.
    pub with_controls: bool,
    pub style: Style,
    pub previous_glyph: String,
    pub next_glyph: String,
    pub bindings: CarouselBindings,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            with_controls: false,
            style: Style::default(),
            previous_glyph: "‹".to_string(),
            next_glyph: "›".to_string(),
            bindings: CarouselBindings::default(),
        }
    }
}

/// Per-slide context handed to the host's render closure.
#[derive(Clone, Copy, Debug)]
pub struct SlideContext {
    pub index: usize,
    pub count: usize,
}

pub struct Carousel {
    strategy: Strategy,
    index: usize,
    scroll_x: u32,
    viewport_w: u16,
    prev_zone: Option<Rect>,
    next_zone: Option<Rect>,
    options: CarouselOptions,
}

impl Carousel {
    /// Mounts the carousel: queries pointer capability once and fixes the
    /// strategy for the widget's lifetime.
    pub fn mount(query: &dyn PointerQuery, options: CarouselOptions) -> Self {
        let strategy = select_strategy(query, options.with_controls);
        Self::with_strategy(strategy, options)
    }

    pub fn with_strategy(strategy: Strategy, options: CarouselOptions) -> Self {
        Self {
            strategy,
            index: 0,
            scroll_x: 0,
            viewport_w: 0,
            prev_zone: None,
            next_zone: None,
            options,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Current slide index. `None` in the Touch strategy, where position is
    /// owned by the scroll offset, and when the collection is empty.
    pub fn index(&self, count: usize) -> Option<usize> {
        match self.strategy {
            Strategy::Touch => None,
            Strategy::Pointer if count == 0 => None,
            Strategy::Pointer => Some(self.index.min(count - 1)),
        }
    }

    pub fn affordances(&self, count: usize) -> Affordances {
        match self.strategy {
            Strategy::Pointer => affordances(self.index, count),
            Strategy::Touch => Affordances::default(),
        }
    }

    /// Steps back one slide. A no-op at the first slide, in the Touch
    /// strategy, and on an empty collection.
    pub fn previous(&mut self, count: usize) -> CarouselAction {
        if self.strategy == Strategy::Touch {
            return CarouselAction::None;
        }
        if count == 0 || self.index == 0 {
            return CarouselAction::None;
        }
        self.index -= 1;
        CarouselAction::Redraw
    }

    /// Steps forward one slide. A no-op at the last slide, in the Touch
    /// strategy, and on an empty collection.
    pub fn next(&mut self, count: usize) -> CarouselAction {
        if self.strategy == Strategy::Touch {
            return CarouselAction::None;
        }
        if count == 0 || self.index + 1 >= count {
            return CarouselAction::None;
        }
        self.index += 1;
        CarouselAction::Redraw
    }

    /// Projection-change entry point: the host calls this after adding,
    /// removing, or reordering slides. Re-reads the full count and clamps
    /// the index into the new bounds. Idempotent.
    pub fn sync_slides(&mut self, count: usize) -> CarouselAction {
        match self.strategy {
            Strategy::Pointer => {
                self.index = self.index.min(count.saturating_sub(1));
            }
            Strategy::Touch => {
                let w = self.viewport_w as u32;
                let max = count.saturating_sub(1) as u32 * w;
                self.scroll_x = self.scroll_x.min(max);
            }
        }
        CarouselAction::Redraw
    }

    pub fn handle_event(&mut self, event: InputEvent, count: usize) -> CarouselAction {
        match self.strategy {
            Strategy::Pointer => self.handle_pointer_event(event, count),
            Strategy::Touch => self.handle_touch_event(event, count),
        }
    }

    pub fn render<F>(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme, count: usize, render_slide: F)
    where
        F: FnMut(Rect, SlideContext, &mut Buffer, &Theme),
    {
        match self.strategy {
            Strategy::Pointer => self.render_pointer(area, buf, theme, count, render_slide),
            Strategy::Touch => self.render_touch(area, buf, theme, count, render_slide),
        }
    }

    fn handle_pointer_event(&mut self, event: InputEvent, count: usize) -> CarouselAction {
        match event {
            InputEvent::Key(key) => match self.options.bindings.nav_for(&key) {
                Some(Nav::Previous) => self.previous(count),
                Some(Nav::Next) => self.next(count),
                None => CarouselAction::None,
            },
            InputEvent::Mouse(MouseEvent {
                x,
                y,
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => {
                let at = Position::new(x, y);
                if self.prev_zone.is_some_and(|z| z.contains(at)) {
                    return self.previous(count);
                }
                if self.next_zone.is_some_and(|z| z.contains(at)) {
                    return self.next(count);
                }
                CarouselAction::None
            }
            _ => CarouselAction::None,
        }
    }

    fn handle_touch_event(&mut self, event: InputEvent, count: usize) -> CarouselAction {
        let InputEvent::Mouse(mouse) = event else {
            return CarouselAction::None;
        };
        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.snap_forward(count)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => self.snap_back(),
            MouseEventKind::Down(_) => CarouselAction::None,
        }
    }

    fn render_pointer<F>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        count: usize,
        mut render_slide: F,
    ) where
        F: FnMut(Rect, SlideContext, &mut Buffer, &Theme),
    {
        self.prev_zone = None;
        self.next_zone = None;
        if area.width < 3 || area.height == 0 {
            return;
        }

        let prev_zone = Rect::new(area.x, area.y, 1, area.height);
        let next_zone = Rect::new(area.x + area.width - 1, area.y, 1, area.height);
        let slide_area = Rect::new(area.x + 1, area.y, area.width - 2, area.height);
        self.viewport_w = slide_area.width;

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        // Affordances are derived fresh on every render, never stored.
        let index = self.index.min(count.saturating_sub(1));
        let state = affordances(index, count);

        if count > 0 {
            render_slide(slide_area, SlideContext { index, count }, buf, theme);
        }

        let prev_style = if state.previous_enabled {
            theme.control
        } else {
            theme.control_disabled
        };
        let next_style = if state.next_enabled {
            theme.control
        } else {
            theme.control_disabled
        };
        render::render_str_centered(prev_zone, buf, &self.options.previous_glyph, prev_style);
        render::render_str_centered(next_zone, buf, &self.options.next_glyph, next_style);

        self.prev_zone = Some(prev_zone);
        self.next_zone = Some(next_zone);
    }

    fn render_touch<F>(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        theme: &Theme,
        count: usize,
        mut render_slide: F,
    ) where
        F: FnMut(Rect, SlideContext, &mut Buffer, &Theme),
    {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.viewport_w = area.width;

        let base_style = if self.options.style == Style::default() {
            theme.text_primary
        } else {
            self.options.style
        };
        buf.set_style(area, base_style);

        if count == 0 {
            self.scroll_x = 0;
            return;
        }

        // Settle on a slide boundary; the collection may have shrunk since
        // the offset last moved.
        let w = area.width as u32;
        let max = (count - 1) as u32 * w;
        self.scroll_x = self.scroll_x.min(max);
        self.scroll_x = (self.scroll_x / w) * w;

        let index = (self.scroll_x / w) as usize;
        render_slide(area, SlideContext { index, count }, buf, theme);
    }

    fn snap_forward(&mut self, count: usize) -> CarouselAction {
        let w = self.viewport_w as u32;
        if w == 0 || count == 0 {
            return CarouselAction::None;
        }
        let max = (count - 1) as u32 * w;
        let next = ((self.scroll_x / w) + 1).saturating_mul(w).min(max);
        if next == self.scroll_x {
            return CarouselAction::None;
        }
        self.scroll_x = next;
        CarouselAction::Redraw
    }

    fn snap_back(&mut self) -> CarouselAction {
        let w = self.viewport_w as u32;
        if w == 0 {
            return CarouselAction::None;
        }
        let prev = (self.scroll_x / w).saturating_sub(1) * w;
        if prev == self.scroll_x {
            return CarouselAction::None;
        }
        self.scroll_x = prev;
        CarouselAction::Redraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerClass;

    fn pointer_carousel() -> Carousel {
        Carousel::with_strategy(Strategy::Pointer, CarouselOptions::default())
    }

    fn draw(c: &mut Carousel, count: usize, w: u16, h: u16) -> Buffer {
        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        c.render(area, &mut buf, &theme, count, |slide_area, ctx, buf, theme| {
            let label = format!("slide {}", ctx.index);
            crate::render::render_str_centered(slide_area, buf, &label, theme.text_primary);
        });
        buf
    }

    #[test]
    fn next_and_previous_stay_in_bounds() {
        let mut c = pointer_carousel();
        assert_eq!(c.previous(3), CarouselAction::None);
        assert_eq!(c.next(3), CarouselAction::Redraw);
        assert_eq!(c.next(3), CarouselAction::Redraw);
        assert_eq!(c.index(3), Some(2));
        assert_eq!(c.next(3), CarouselAction::None);
        assert_eq!(c.index(3), Some(2));
    }

    #[test]
    fn affordances_track_the_scenario() {
        let mut c = pointer_carousel();
        assert_eq!(
            c.affordances(3),
            Affordances {
                previous_enabled: false,
                next_enabled: true
            }
        );
        c.next(3);
        c.next(3);
        assert_eq!(
            c.affordances(3),
            Affordances {
                previous_enabled: true,
                next_enabled: false
            }
        );
        c.next(3);
        assert_eq!(c.index(3), Some(2));
    }

    #[test]
    fn affordance_derivation_is_pure() {
        assert_eq!(affordances(1, 3), affordances(1, 3));
        assert_eq!(affordances(0, 0), Affordances::default());
    }

    #[test]
    fn empty_collection_disables_everything() {
        let mut c = pointer_carousel();
        assert_eq!(c.affordances(0), Affordances::default());
        assert_eq!(c.next(0), CarouselAction::None);
        assert_eq!(c.previous(0), CarouselAction::None);
        assert_eq!(c.index(0), None);
        draw(&mut c, 0, 10, 3);
    }

    #[test]
    fn shrink_clamps_index_on_sync() {
        let mut c = pointer_carousel();
        c.next(3);
        c.next(3);
        assert_eq!(c.index(3), Some(2));
        c.sync_slides(1);
        assert_eq!(c.index(1), Some(0));
        assert_eq!(c.affordances(1), Affordances::default());
    }

    #[test]
    fn sync_is_idempotent() {
        let mut c = pointer_carousel();
        c.next(5);
        c.sync_slides(5);
        let first = c.index(5);
        c.sync_slides(5);
        assert_eq!(c.index(5), first);
    }

    #[test]
    fn index_fuzz_stays_in_bounds() {
        for count in 0..5usize {
            let mut c = pointer_carousel();
            for step in 0..40 {
                if step % 3 == 0 {
                    c.previous(count);
                } else {
                    c.next(count);
                }
                if count == 0 {
                    assert_eq!(c.index(count), None);
                } else {
                    assert!(c.index(count).unwrap() < count);
                }
            }
        }
    }

    #[test]
    fn coarse_pointer_mount_selects_touch_and_hides_controls() {
        let q = || Some(PointerClass::Coarse);
        let mut c = Carousel::mount(&q, CarouselOptions::default());
        assert_eq!(c.strategy(), Strategy::Touch);

        let buf = draw(&mut c, 3, 10, 3);
        for x in 0..10 {
            for y in 0..3 {
                let sym = buf.cell((x, y)).unwrap().symbol();
                assert_ne!(sym, "‹");
                assert_ne!(sym, "›");
            }
        }
    }

    #[test]
    fn with_controls_forces_pointer_on_coarse_device() {
        let q = || Some(PointerClass::Coarse);
        let c = Carousel::mount(
            &q,
            CarouselOptions {
                with_controls: true,
                ..Default::default()
            },
        );
        assert_eq!(c.strategy(), Strategy::Pointer);
    }

    #[test]
    fn control_clicks_navigate_after_render() {
        let mut c = pointer_carousel();
        draw(&mut c, 3, 12, 3);

        // Right edge is the next control.
        let action = c.handle_event(InputEvent::Mouse(MouseEvent::click(11, 1)), 3);
        assert_eq!(action, CarouselAction::Redraw);
        assert_eq!(c.index(3), Some(1));

        let action = c.handle_event(InputEvent::Mouse(MouseEvent::click(0, 0)), 3);
        assert_eq!(action, CarouselAction::Redraw);
        assert_eq!(c.index(3), Some(0));

        // Click in the slide body does nothing.
        let action = c.handle_event(InputEvent::Mouse(MouseEvent::click(5, 1)), 3);
        assert_eq!(action, CarouselAction::None);
    }

    #[test]
    fn control_glyphs_reflect_affordances() {
        use ratatui::style::Modifier;

        let mut c = pointer_carousel();
        let buf = draw(&mut c, 3, 12, 3);
        let theme = Theme::default();
        assert_eq!(buf.cell((0, 1)).unwrap().symbol(), "‹");
        assert_eq!(buf.cell((0, 1)).unwrap().style().fg, theme.control_disabled.fg);
        assert_eq!(buf.cell((11, 1)).unwrap().symbol(), "›");
        assert!(
            buf.cell((11, 1))
                .unwrap()
                .style()
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn key_bindings_navigate() {
        let mut c = pointer_carousel();
        c.handle_event(InputEvent::Key(KeyEvent::new(KeyCode::Right)), 2);
        assert_eq!(c.index(2), Some(1));
        c.handle_event(InputEvent::Key(keymap::key_char('h')), 2);
        assert_eq!(c.index(2), Some(0));
    }

    #[test]
    fn touch_scroll_snaps_between_slides() {
        let mut c = Carousel::with_strategy(Strategy::Touch, CarouselOptions::default());
        draw(&mut c, 3, 10, 3);

        let scroll = |c: &mut Carousel, kind| {
            c.handle_event(
                InputEvent::Mouse(MouseEvent {
                    x: 0,
                    y: 0,
                    kind,
                    modifiers: crate::input::KeyModifiers::none(),
                }),
                3,
            )
        };

        assert_eq!(scroll(&mut c, MouseEventKind::ScrollRight), CarouselAction::Redraw);
        assert_eq!(scroll(&mut c, MouseEventKind::ScrollRight), CarouselAction::Redraw);
        // At the last boundary: further scrolling settles in place.
        assert_eq!(scroll(&mut c, MouseEventKind::ScrollRight), CarouselAction::None);
        assert_eq!(scroll(&mut c, MouseEventKind::ScrollLeft), CarouselAction::Redraw);
    }

    #[test]
    fn touch_navigation_methods_are_noops() {
        let mut c = Carousel::with_strategy(Strategy::Touch, CarouselOptions::default());
        assert_eq!(c.next(5), CarouselAction::None);
        assert_eq!(c.previous(5), CarouselAction::None);
        assert_eq!(c.index(5), None);
    }

    #[test]
    fn touch_shrink_clamps_scroll_offset() {
        let mut c = Carousel::with_strategy(Strategy::Touch, CarouselOptions::default());
        draw(&mut c, 3, 10, 3);
        c.handle_event(
            InputEvent::Mouse(MouseEvent {
                x: 0,
                y: 0,
                kind: MouseEventKind::ScrollRight,
                modifiers: crate::input::KeyModifiers::none(),
            }),
            3,
        );
        c.sync_slides(1);
        // Rendering after the shrink shows the only remaining slide.
        let buf = draw(&mut c, 1, 10, 3);
        assert_eq!(buf.cell((1, 1)).unwrap().symbol(), "s");
    }
}
