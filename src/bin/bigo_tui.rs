//! Big-O Complexity Lab - Terminal User Interface
//!
//! A TUI rendition of the four complexity-class animations using ratatui.
//! App logic lives in `bigolab::tui::app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use bigolab::config::LabConfig;
    use bigolab::tui::LabApp;

    let args: Vec<String> = std::env::args().collect();
    let app = if args.len() > 1 {
        match LabApp::from_yaml_file(&args[1]) {
            Ok(app) => app,
            Err(e) => {
                eprintln!("Error loading '{}': {e}", args[1]);
                eprintln!("Usage: bigo-tui [path/to/lab.yaml]");
                std::process::exit(1);
            }
        }
    } else {
        LabApp::new(LabConfig::default())
    };

    tui::run(app)
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with: cargo run --bin bigo-tui --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use bigolab::demos::{BarFrame, ComplexityDemo, DemoFrame, GridFrame, SlotState};
    use bigolab::engine::ComplexityClass;
    use bigolab::tui::LabApp;
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Block, Borders, Paragraph},
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    pub fn run(mut app: LabApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let tick_rate = Duration::from_millis(20);
        let result = run_main_loop(&mut terminal, &mut app, tick_rate);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_main_loop(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        app: &mut LabApp,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| ui(f, app))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if crossterm::event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.tick(tick_rate);
                last_tick = Instant::now();
            }

            if app.should_quit() {
                break;
            }
        }

        Ok(())
    }

    fn ui(f: &mut Frame, app: &LabApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(f.area());

        render_title(f, chunks[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        render_demo(f, top[0], app, ComplexityClass::Constant);
        render_demo(f, top[1], app, ComplexityClass::Linear);
        render_demo(f, bottom[0], app, ComplexityClass::Quadratic);
        render_demo(f, bottom[1], app, ComplexityClass::Logarithmic);

        render_status_bar(f, chunks[2], app);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " Big-O Complexity Lab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("- O(1), O(n), O(n²), O(log n) side by side"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("bigolab"));
        f.render_widget(title, area);
    }

    fn slot_color(slot: SlotState) -> Color {
        match slot {
            SlotState::Idle => Color::DarkGray,
            SlotState::Window => Color::Cyan,
            SlotState::Probe => Color::Yellow,
            SlotState::Found | SlotState::Visited => Color::Green,
            SlotState::Dimmed => Color::Black,
        }
    }

    /// One row of double-width blocks, colored per slot.
    fn bar_row(frame: &BarFrame) -> Line<'static> {
        let spans: Vec<Span> = frame
            .slots
            .iter()
            .map(|&slot| Span::styled("██", Style::default().fg(slot_color(slot))))
            .collect();
        Line::from(spans)
    }

    fn bar_lines(frame: &BarFrame, height: usize) -> Vec<Line<'static>> {
        (0..height).map(|_| bar_row(frame)).collect()
    }

    /// The O(1) strip: one block row plus an arrow marking the probe.
    fn constant_lines(frame: &BarFrame) -> Vec<Line<'static>> {
        let mut lines = bar_lines(frame, 2);
        let arrow: Vec<Span> = frame
            .slots
            .iter()
            .map(|&slot| {
                if slot == SlotState::Probe || slot == SlotState::Found {
                    Span::styled(
                        "▼▼",
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                }
            })
            .collect();
        lines.push(Line::from(arrow));
        lines
    }

    /// n rows of n double-width cells.
    fn grid_lines(frame: &GridFrame) -> Vec<Line<'static>> {
        (0..frame.n)
            .map(|row| {
                let spans: Vec<Span> = (0..frame.n)
                    .map(|col| {
                        Span::styled(
                            "██",
                            Style::default().fg(slot_color(frame.cell(row, col))),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn demo_lines(demo: &dyn ComplexityDemo) -> Vec<Line<'static>> {
        match demo.frame() {
            DemoFrame::Bars(frame) => {
                if demo.class() == ComplexityClass::Constant {
                    constant_lines(&frame)
                } else {
                    bar_lines(&frame, 4)
                }
            }
            DemoFrame::Grid(frame) => grid_lines(&frame),
        }
    }

    fn render_demo(f: &mut Frame, area: Rect, app: &LabApp, class: ComplexityClass) {
        let demo = app.demo(class);
        let focused = app.focus == class;

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };

        let title = format!(
            " {} {} | n={} | ops: {} ",
            class.notation(),
            demo.name(),
            demo.size(),
            demo.stat_line()
        );

        let mut lines = demo_lines(demo);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Status: "),
            if demo.is_running() {
                Span::styled("RUNNING", Style::default().fg(Color::Green))
            } else {
                Span::styled("idle", Style::default().fg(Color::Gray))
            },
        ]));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        );
        f.render_widget(panel, area);
    }

    fn render_status_bar(f: &mut Frame, area: Rect, app: &LabApp) {
        let status_text = Line::from(vec![
            Span::styled(
                format!(" Focus: {} ", app.focus.notation()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| Tab/1-4 focus | +/- size | Enter run | R reset | Q quit | "),
            Span::raw(format!("Frame: {} ", app.frame_count)),
        ]);

        let status_bar = Paragraph::new(status_text)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(status_bar, area);
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use ratatui::backend::TestBackend;

        fn create_test_terminal() -> Terminal<TestBackend> {
            let backend = TestBackend::new(120, 50);
            Terminal::new(backend).expect("Failed to create test terminal")
        }

        #[test]
        fn test_ui_renders_without_panic() {
            let mut terminal = create_test_terminal();
            let app = LabApp::default();

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render without panic");
        }

        #[test]
        fn test_ui_renders_mid_run() {
            let mut terminal = create_test_terminal();
            let mut app = LabApp::default();
            for class in ComplexityClass::ALL {
                app.focus = class;
                app.run_focused();
            }
            for _ in 0..10 {
                app.tick(Duration::from_millis(20));
            }

            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render mid-run");
        }

        #[test]
        fn test_render_title() {
            let mut terminal = create_test_terminal();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_title(f, area);
                })
                .expect("Title should render");
        }

        #[test]
        fn test_render_each_demo_panel() {
            let mut terminal = create_test_terminal();
            let app = LabApp::default();

            for class in ComplexityClass::ALL {
                terminal
                    .draw(|f| {
                        let area = f.area();
                        render_demo(f, area, &app, class);
                    })
                    .expect("Demo panel should render");
            }
        }

        #[test]
        fn test_render_status_bar() {
            let mut terminal = create_test_terminal();
            let app = LabApp::default();

            terminal
                .draw(|f| {
                    let area = f.area();
                    render_status_bar(f, area, &app);
                })
                .expect("Status bar should render");
        }

        #[test]
        fn test_constant_lines_mark_probe() {
            let mut app = LabApp::default();
            app.focus = ComplexityClass::Constant;
            app.run_focused();
            let lines = demo_lines(app.demo(ComplexityClass::Constant));
            // Strip rows plus the arrow row.
            assert_eq!(lines.len(), 3);
        }

        #[test]
        fn test_grid_lines_square() {
            let app = LabApp::default();
            let lines = demo_lines(app.demo(ComplexityClass::Quadratic));
            assert_eq!(lines.len(), app.quadratic.size());
        }

        #[test]
        fn test_ui_various_sizes() {
            let mut terminal = create_test_terminal();
            let mut app = LabApp::default();

            app.focus = ComplexityClass::Linear;
            for _ in 0..40 {
                app.handle_key(crossterm::event::KeyCode::Char('+'));
            }
            terminal
                .draw(|f| ui(f, &app))
                .expect("UI should render at max linear size");
        }

        #[test]
        fn test_slot_colors_distinct_for_active_states() {
            assert_ne!(slot_color(SlotState::Probe), slot_color(SlotState::Idle));
            assert_ne!(slot_color(SlotState::Window), slot_color(SlotState::Dimmed));
        }
    }
}
