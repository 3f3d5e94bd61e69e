use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui_controls::carousel::Affordances;
use ratatui_controls::carousel::Carousel;
use ratatui_controls::carousel::CarouselAction;
use ratatui_controls::carousel::CarouselOptions;
use ratatui_controls::input::InputEvent;
use ratatui_controls::input::KeyModifiers;
use ratatui_controls::input::MouseEvent;
use ratatui_controls::input::MouseEventKind;
use ratatui_controls::pointer::PointerClass;
use ratatui_controls::pointer::Strategy;
use ratatui_controls::theme::Theme;

fn render_text(carousel: &mut Carousel, slides: &[String], w: u16, h: u16) -> Vec<String> {
    let area = Rect::new(0, 0, w, h);
    let mut buf = Buffer::empty(area);
    let theme = Theme::default();
    carousel.render(area, &mut buf, &theme, slides.len(), |slide_area, ctx, buf, theme| {
        let text = slides.get(ctx.index).map(String::as_str).unwrap_or("");
        ratatui_controls::render::render_str_centered(slide_area, buf, text, theme.text_primary);
    });

    let mut rows = Vec::new();
    for y in 0..h {
        let mut row = String::new();
        for x in 0..w {
            row.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        rows.push(row);
    }
    rows
}

fn slides(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("slide-{i}")).collect()
}

#[test]
fn with_controls_three_slide_walkthrough() {
    let query = || Some(PointerClass::Coarse);
    let mut c = Carousel::mount(
        &query,
        CarouselOptions {
            with_controls: true,
            ..Default::default()
        },
    );
    assert_eq!(c.strategy(), Strategy::Pointer);

    let deck = slides(3);
    assert_eq!(c.index(deck.len()), Some(0));
    assert_eq!(
        c.affordances(deck.len()),
        Affordances {
            previous_enabled: false,
            next_enabled: true
        }
    );

    assert_eq!(c.next(deck.len()), CarouselAction::Redraw);
    assert_eq!(c.next(deck.len()), CarouselAction::Redraw);
    assert_eq!(c.index(deck.len()), Some(2));
    assert_eq!(
        c.affordances(deck.len()),
        Affordances {
            previous_enabled: true,
            next_enabled: false
        }
    );

    assert_eq!(c.next(deck.len()), CarouselAction::None);
    assert_eq!(c.index(deck.len()), Some(2));

    let rows = render_text(&mut c, &deck, 13, 3);
    assert!(rows[1].contains("slide-2"));
    assert!(rows[1].starts_with("‹"));
    assert!(rows[1].ends_with("›"));
}

#[test]
fn empty_deck_never_crashes() {
    let query = || None;
    let mut c = Carousel::mount(&query, CarouselOptions::default());
    assert_eq!(c.strategy(), Strategy::Pointer);

    let deck: Vec<String> = Vec::new();
    assert_eq!(c.affordances(0), Affordances::default());
    assert_eq!(c.next(0), CarouselAction::None);
    assert_eq!(c.previous(0), CarouselAction::None);
    c.sync_slides(0);

    let rows = render_text(&mut c, &deck, 10, 3);
    assert!(rows[1].contains('‹'));
    assert!(rows[1].contains('›'));
}

#[test]
fn shrinking_deck_mid_navigation_recovers() {
    let query = || Some(PointerClass::Fine);
    let mut c = Carousel::mount(&query, CarouselOptions::default());

    let mut deck = slides(3);
    c.next(deck.len());
    c.next(deck.len());
    assert_eq!(c.index(deck.len()), Some(2));

    deck.truncate(1);
    c.sync_slides(deck.len());
    assert_eq!(c.index(deck.len()), Some(0));
    assert_eq!(c.affordances(deck.len()), Affordances::default());

    let rows = render_text(&mut c, &deck, 13, 3);
    assert!(rows[1].contains("slide-0"));
}

#[test]
fn growing_deck_re_enables_next() {
    let query = || Some(PointerClass::Fine);
    let mut c = Carousel::mount(&query, CarouselOptions::default());

    let mut deck = slides(2);
    c.next(deck.len());
    assert!(!c.affordances(deck.len()).next_enabled);

    deck.push("slide-2".to_string());
    c.sync_slides(deck.len());
    assert!(c.affordances(deck.len()).next_enabled);
    assert_eq!(c.index(deck.len()), Some(1));
}

#[test]
fn touch_mode_scrolls_through_the_deck() {
    let query = || Some(PointerClass::Coarse);
    let mut c = Carousel::mount(&query, CarouselOptions::default());
    assert_eq!(c.strategy(), Strategy::Touch);

    let deck = slides(3);
    let rows = render_text(&mut c, &deck, 11, 3);
    assert!(rows[1].contains("slide-0"));
    assert!(!rows[1].contains('‹'));

    let scroll = InputEvent::Mouse(MouseEvent {
        x: 0,
        y: 0,
        kind: MouseEventKind::ScrollRight,
        modifiers: KeyModifiers::none(),
    });
    assert_eq!(c.handle_event(scroll.clone(), deck.len()), CarouselAction::Redraw);
    let rows = render_text(&mut c, &deck, 11, 3);
    assert!(rows[1].contains("slide-1"));

    // Navigation calls stay inert in touch mode.
    assert_eq!(c.next(deck.len()), CarouselAction::None);
    assert_eq!(c.index(deck.len()), None);

    c.handle_event(scroll.clone(), deck.len());
    assert_eq!(c.handle_event(scroll, deck.len()), CarouselAction::None);
    let rows = render_text(&mut c, &deck, 11, 3);
    assert!(rows[1].contains("slide-2"));
}
