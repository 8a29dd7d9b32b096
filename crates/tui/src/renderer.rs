use std::io::stdout;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lanechart_core::Chart;
use lanechart_core::views::bands::render_lanes;
use lanechart_core::views::cursor::render_cursor;
use lanechart_protocol::{Color, RenderCommand, Viewport};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color as TermColor, Style},
    widgets::Block,
};

const PAN_STEP_FRACTION: f64 = 0.1;
const ZOOM_STEP: f64 = 1.3;
const SCROLL_STEP: f64 = 2.0;

fn to_term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// Interactive loop: the chart's projection is the only state the input
/// handlers mutate. Each event fully resolves before the next is read.
pub fn run(mut chart: Chart) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut scroll_y: f64 = 0.0;
    let mut cursor_col: Option<f64> = None;

    loop {
        let term_size = terminal.size()?;
        let width = f64::from(term_size.width);
        let height = f64::from(term_size.height.saturating_sub(1));
        chart.resize(width)?;

        let viewport = Viewport {
            x: 0.0,
            y: scroll_y,
            width,
            height,
            dpr: 1.0,
        };

        let mut commands = render_lanes(
            chart.lanes(),
            chart.style(),
            chart.projection(),
            &viewport,
        );
        if let Some(col) = cursor_col {
            commands.extend(render_cursor(chart.projection(), &viewport, col));
        }

        let readout = cursor_col.map(|col| chart.readout(col));

        terminal.draw(|frame| {
            let area = frame.area();

            let header_area = Rect::new(0, 0, area.width, 1);
            let header = Block::default()
                .title(format!(
                    " lanechart — {} | ←→ pan | +/- zoom | 0 reset | q quit ",
                    readout.as_deref().unwrap_or("move mouse for readout"),
                ))
                .style(Style::default().fg(TermColor::White).bg(TermColor::DarkGray));
            frame.render_widget(header, header_area);

            let content_area = Rect::new(0, 1, area.width, area.height.saturating_sub(1));
            let block = Block::default().style(Style::default().bg(TermColor::Black));
            frame.render_widget(block, content_area);

            let buf = frame.buffer_mut();
            for cmd in &commands {
                match cmd {
                    RenderCommand::DrawRect {
                        rect, fill, label, ..
                    } => {
                        let col = rect.x.max(0.0) as u16;
                        let row = rect.y as u16;
                        let width = (rect.right().min(viewport.width) - rect.x.max(0.0)) as u16;
                        if row >= content_area.height || width == 0 {
                            continue;
                        }
                        let fg = to_term_color(*fill);
                        let label = label.as_deref().unwrap_or("");
                        let display: String = if (width as usize) >= label.len() + 2 {
                            format!(" {label:<w$}", w = (width as usize).saturating_sub(2))
                        } else {
                            "█".repeat(width as usize)
                        };
                        for (i, ch) in display.chars().take(width as usize).enumerate() {
                            let x = content_area.x + col + i as u16;
                            let y = content_area.y + row;
                            if x < content_area.x + content_area.width
                                && y < content_area.y + content_area.height
                            {
                                buf[(x, y)].set_char(ch).set_fg(fg).set_bg(TermColor::Black);
                            }
                        }
                    }
                    RenderCommand::DrawText {
                        position,
                        text,
                        color,
                        ..
                    } => {
                        let col = position.x.max(0.0) as u16;
                        let row = position.y.max(0.0) as u16;
                        if row >= content_area.height {
                            continue;
                        }
                        for (i, ch) in text.chars().enumerate() {
                            let x = content_area.x + col + i as u16;
                            let y = content_area.y + row;
                            if x < content_area.x + content_area.width {
                                buf[(x, y)].set_char(ch).set_fg(to_term_color(*color));
                            }
                        }
                    }
                    RenderCommand::DrawLine { from, to, color, .. } => {
                        // Only vertical lines (the time cursor) exist here.
                        let col = from.x as u16;
                        if col >= content_area.width {
                            continue;
                        }
                        let top = from.y.min(to.y).max(0.0) as u16;
                        let bottom = (from.y.max(to.y) as u16).min(content_area.height);
                        for row in top..bottom {
                            let x = content_area.x + col;
                            let y = content_area.y + row;
                            buf[(x, y)].set_char('│').set_fg(to_term_color(*color));
                        }
                    }
                    RenderCommand::BeginGroup { .. } | RenderCommand::EndGroup => {}
                }
            }
        })?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    // Arrow keys move the view, so the content drags the
                    // opposite way.
                    KeyCode::Left => chart.pan(width * PAN_STEP_FRACTION),
                    KeyCode::Right => chart.pan(-width * PAN_STEP_FRACTION),
                    KeyCode::Up => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    KeyCode::Down => {
                        scroll_y = (scroll_y + SCROLL_STEP).min(chart.total_height());
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        chart.zoom(ZOOM_STEP, cursor_col.unwrap_or(width / 2.0));
                    }
                    KeyCode::Char('-') => {
                        chart.zoom(1.0 / ZOOM_STEP, cursor_col.unwrap_or(width / 2.0));
                    }
                    KeyCode::Char('0') | KeyCode::Char('r') => chart.reset_view(),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                        // Only the column matters: vertical pointer movement
                        // never shifts the lanes.
                        cursor_col = Some(f64::from(mouse.column));
                    }
                    MouseEventKind::ScrollUp => scroll_y = (scroll_y - SCROLL_STEP).max(0.0),
                    MouseEventKind::ScrollDown => {
                        scroll_y = (scroll_y + SCROLL_STEP).min(chart.total_height());
                    }
                    MouseEventKind::ScrollLeft => chart.pan(SCROLL_STEP),
                    MouseEventKind::ScrollRight => chart.pan(-SCROLL_STEP),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
