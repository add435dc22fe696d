//! Demo drawing
//!
//! Paints the content slice at the eased offset, a speed gauge, and a
//! status line comparing the native and eased positions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_content(frame, app, chunks[0]);
    draw_speed_gauge(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);
}

/// The content slice starting at the eased top row.
fn draw_content(frame: &mut Frame, app: &App, area: Rect) {
    let top = app.doc.eased_top().max(0.0).floor() as usize;
    let rows = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = app
        .doc
        .lines()
        .iter()
        .skip(top)
        .take(rows)
        .map(|line| Line::from(line.as_str()))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" slipscroll ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_speed_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(state.speed_in_lerp.clamp(0.0, 1.0))
        .label(format!("speed {:.3}", state.speed_in_lerp));
    frame.render_widget(gauge, area);
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let state = app.state();
    let status = format!(
        " native {:>7.1}  eased {:>7.1}  height {:>5.0} │ j/k scroll · C-d/C-u half · C-f/C-b page · gg/G ends · q quit",
        state.scroll_position, state.scroll_position_in_lerp, state.scrollable_height,
    );
    let paragraph = Paragraph::new(status)
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}
