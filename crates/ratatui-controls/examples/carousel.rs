use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui_controls::carousel::Carousel;
use ratatui_controls::carousel::CarouselOptions;
use ratatui_controls::crossterm_input::MouseCaptureGuard;
use ratatui_controls::crossterm_input::input_event_from_crossterm;
use ratatui_controls::input::InputEvent;
use ratatui_controls::input::KeyCode;
use ratatui_controls::pointer::PointerClass;
use ratatui_controls::pointer::Strategy;
use ratatui_controls::theme::Theme;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let touch = std::env::args().any(|a| a == "--touch");
    let with_controls = std::env::args().any(|a| a == "--with-controls");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let mouse = MouseCaptureGuard::acquire()?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // The demo host answers the capability query from its CLI flag.
    let query = move || {
        Some(if touch {
            PointerClass::Coarse
        } else {
            PointerClass::Fine
        })
    };
    let mut carousel = Carousel::mount(
        &query,
        CarouselOptions {
            with_controls,
            ..Default::default()
        },
    );

    let mut slides: Vec<String> = (1..=5).map(|i| format!("Slide {i} of 5")).collect();

    let res = run(&mut terminal, &mut carousel, &mut slides);

    mouse.release()?;
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
    carousel: &mut Carousel,
    slides: &mut Vec<String>,
) -> io::Result<()> {
    let theme = Theme::default();
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .areas(area);

            let title = match carousel.strategy() {
                Strategy::Pointer => "Carousel — pointer (←/→, h/l, click ‹ ›, a/d add/drop, q)",
                Strategy::Touch => "Carousel — touch (scroll wheel, a/d add/drop, q)",
            };
            let block = Block::default().title(title).borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            carousel.render(inner, buf, &theme, slides.len(), |slide_area, ctx, buf, theme| {
                let text = slides.get(ctx.index).map(String::as_str).unwrap_or("");
                ratatui_controls::render::render_str_centered(
                    slide_area,
                    buf,
                    text,
                    theme.text_primary,
                );
            });

            let state = carousel.affordances(slides.len());
            let status_line = format!(
                "slides={}  index={:?}  prev={}  next={}",
                slides.len(),
                carousel.index(slides.len()),
                state.previous_enabled,
                state.next_enabled,
            );
            buf.set_span(status.x, status.y, &Span::styled(status_line, Style::default()), status.width);
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            if let crossterm::event::Event::Key(key) = &ev {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    match key.code {
                        crossterm::event::KeyCode::Char('q') => return Ok(()),
                        crossterm::event::KeyCode::Char('a') => {
                            slides.push(format!("Late slide {}", slides.len() + 1));
                            carousel.sync_slides(slides.len());
                            continue;
                        }
                        crossterm::event::KeyCode::Char('d') => {
                            slides.pop();
                            carousel.sync_slides(slides.len());
                            continue;
                        }
                        _ => {}
                    }
                }
            }

            if let Some(ev) = input_event_from_crossterm(ev) {
                // Esc also quits, for terminals that swallow 'q'.
                if matches!(&ev, InputEvent::Key(k) if k.code == KeyCode::Esc) {
                    return Ok(());
                }
                carousel.handle_event(ev, slides.len());
            }
        }
    }
}
