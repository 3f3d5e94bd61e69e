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
use ratatui_controls::code_input::CodeInput;
use ratatui_controls::code_input::CodeInputAction;
use ratatui_controls::code_input::CodeInputOptions;
use ratatui_controls::crossterm_input::MouseCaptureGuard;
use ratatui_controls::crossterm_input::input_event_from_crossterm;
use ratatui_controls::input::InputEvent;
use ratatui_controls::input::KeyCode;
use ratatui_controls::stepper::NumberStepper;
use ratatui_controls::stepper::StepperOptions;
use ratatui_controls::theme::Theme;
use std::io;
use std::time::Duration;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Code,
    Stepper,
}

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let mouse = MouseCaptureGuard::acquire()?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    mouse.release()?;
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend<Error = io::Error>>(
    terminal: &mut Terminal<B>,
) -> io::Result<()> {
    let theme = Theme::default();
    let mut code = CodeInput::with_options(CodeInputOptions {
        fields: 6,
        ..Default::default()
    });
    let mut stepper = NumberStepper::with_options(StepperOptions {
        min: Some(0.0),
        max: Some(10.0),
        step: 0.5,
        ..Default::default()
    });
    let mut focus = Focus::Code;
    let mut last_code: Option<String> = None;

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [code_area, stepper_area, status] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(1),
                ])
                .areas(area);

            let code_block = Block::default()
                .title(if focus == Focus::Code {
                    "Verification code (type, paste, Backspace) *"
                } else {
                    "Verification code"
                })
                .borders(Borders::ALL);
            let code_inner = code_block.inner(code_area);
            f.render_widget(code_block, code_area);

            let stepper_block = Block::default()
                .title(if focus == Focus::Stepper {
                    "Quantity (↑/↓, digits, click - +) *"
                } else {
                    "Quantity"
                })
                .borders(Borders::ALL);
            let stepper_inner = stepper_block.inner(stepper_area);
            f.render_widget(stepper_block, stepper_area);

            let buf = f.buffer_mut();
            code.render(code_inner, buf, &theme);
            stepper.render(stepper_inner, buf, &theme);

            let status_line = match &last_code {
                Some(c) => format!("code complete: {c}  quantity={}  (Tab switches, q quits)", stepper.value()),
                None => format!("quantity={}  (Tab switches, q quits)", stepper.value()),
            };
            buf.set_span(status.x, status.y, &Span::styled(status_line, Style::default()), status.width);
        })?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            let ev = crossterm::event::read()?;
            let Some(ev) = input_event_from_crossterm(ev) else {
                continue;
            };

            if let InputEvent::Key(key) = &ev {
                match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Char('q') if focus == Focus::Stepper => return Ok(()),
                    KeyCode::Tab => {
                        focus = match focus {
                            Focus::Code => Focus::Stepper,
                            Focus::Stepper => Focus::Code,
                        };
                        continue;
                    }
                    _ => {}
                }
            }

            // Mouse events go to both widgets; each hit-tests its own zones.
            let is_mouse = matches!(ev, InputEvent::Mouse(_));
            if is_mouse {
                if let CodeInputAction::Completed(c) = code.handle_event(ev.clone()) {
                    last_code = Some(c);
                }
                stepper.handle_event(ev);
            } else {
                match focus {
                    Focus::Code => {
                        if let CodeInputAction::Completed(c) = code.handle_event(ev) {
                            last_code = Some(c);
                        }
                    }
                    Focus::Stepper => {
                        stepper.handle_event(ev);
                    }
                }
            }
        }
    }
}
