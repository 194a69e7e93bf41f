//! Frame layout and widgets

use super::app::App;
use super::input::KEY_HELP;
use crate::dashboard::charts::{DEPTH_AXIS_MAX, ENTROPY_AXIS_MAX};
use crate::dashboard::heatmap::{Heatmap, FILES};
use crate::dashboard::phase::PHASE_LABELS;
use crate::dashboard::{Board, PieceTheme, RollingSeries};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Sparkline},
    Frame,
};

const ACCENT: Color = Color::Rgb(255, 70, 0);
const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);
const HEAT_BACKGROUND: (u8, u8, u8) = (245, 245, 245);

/// Draw the whole dashboard
pub fn draw(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(44),
            Constraint::Length(30),
            Constraint::Length(20),
            Constraint::Min(30),
        ])
        .split(rows[1]);

    draw_roster(frame, columns[0], app);
    draw_board_panel(frame, columns[1], app);
    draw_heatmap(frame, columns[2], app.controller.heatmap());
    draw_charts(frame, columns[3], app);

    frame.render_widget(
        Paragraph::new(KEY_HELP).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.controller.view();
    let mode = if view.live {
        Span::styled(
            " LIVE ",
            Style::default()
                .fg(Color::Black)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(" HISTORY ", Style::default().fg(Color::Black).bg(Color::Gray))
    };
    let synced = view
        .last_sync
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "waiting for server".to_string());

    let line = Line::from(vec![
        mode,
        Span::raw(format!("  ACTOR_0{}", view.active_worker_id)),
        Span::raw(format!("  │  Buffer: {}", view.buffer_count)),
        Span::raw(format!(
            "  │  {}",
            view.move_label.as_deref().unwrap_or("MOVE: -")
        )),
        Span::styled(
            format!("  │  last sync {}", synced),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Self-Play Monitor "),
        ),
        area,
    );
}

fn draw_roster(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for (i, card) in app.controller.roster().cards().iter().enumerate() {
        let marker = if i == app.cursor { "▶ " } else { "  " };
        let mut heading = Style::default().add_modifier(Modifier::BOLD);
        if card.active {
            heading = heading.fg(ACCENT);
        }
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(card.label(), heading),
            Span::raw("  "),
            Span::styled(card.status.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", card.preview),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Workers ")),
        area,
    );
}

fn draw_board_panel(frame: &mut Frame, area: Rect, app: &App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(0)])
        .split(area);

    let view = app.controller.view();
    frame.render_widget(
        Paragraph::new(board_lines(&view.board, app.theme))
            .block(Block::default().borders(Borders::ALL).title(" Board ")),
        parts[0],
    );

    let stats = &view.stats;
    let stat = |name: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<9}", name), Style::default().fg(Color::DarkGray)),
            Span::raw(value.to_string()),
        ])
    };
    let lines = vec![
        stat("Turn", &stats.turn),
        stat("Moves", &stats.moves),
        stat("Depth", &stats.depth),
        stat("Games", &stats.games),
        stat("Samples", &stats.samples),
        stat("NPS", &stats.nps),
        Line::from(vec![
            Span::styled(format!("{:<9}", "Win rate"), Style::default().fg(Color::DarkGray)),
            Span::styled(
                stats.win_rate.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Stats ")),
        parts[1],
    );
}

fn board_lines(board: &Board, theme: PieceTheme) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(9);
    for (row, squares) in board.rows().iter().enumerate() {
        let mut spans = vec![Span::raw(format!("{} ", 8 - row))];
        for (col, square) in squares.iter().enumerate() {
            let bg = if (row + col) % 2 == 0 {
                LIGHT_SQUARE
            } else {
                DARK_SQUARE
            };
            let (text, fg) = match square {
                Some(piece) => (
                    format!(" {} ", piece.glyph(theme)),
                    if piece.is_white() {
                        Color::White
                    } else {
                        Color::Black
                    },
                ),
                None => ("   ".to_string(), Color::Black),
            };
            spans.push(Span::styled(
                text,
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }
    let files: String = FILES.iter().map(|f| format!(" {} ", f)).collect();
    lines.push(Line::from(format!("  {}", files)));
    lines
}

fn draw_heatmap(frame: &mut Frame, area: Rect, heatmap: &Heatmap) {
    let mut lines = Vec::with_capacity(8);
    for row in heatmap.rows() {
        let spans: Vec<Span> = row
            .iter()
            .map(|alpha| {
                let (r, g, b) = Heatmap::blend(*alpha, HEAT_BACKGROUND);
                Span::styled("  ", Style::default().bg(Color::Rgb(r, g, b)))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Search ")),
        area,
    );
}

fn draw_charts(frame: &mut Frame, area: Rect, app: &App) {
    let charts = app.controller.charts();
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
            Constraint::Ratio(1, 6),
        ])
        .split(area);

    draw_line_chart(frame, parts[0], " Win Prob % ", &charts.eval, 100.0, Color::White);
    draw_sparkline(
        frame,
        parts[1],
        " Depth ",
        &charts.depth,
        Some(DEPTH_AXIS_MAX as u64),
        Color::Gray,
    );
    let entropy_max = charts
        .entropy
        .max()
        .map_or(ENTROPY_AXIS_MAX, |m| m.max(ENTROPY_AXIS_MAX));
    draw_line_chart(frame, parts[2], " Entropy ", &charts.entropy, entropy_max, Color::Gray);
    draw_sparkline(frame, parts[3], " Inference ms ", &charts.latency, None, ACCENT);
    draw_line_chart(frame, parts[4], " Waste % ", &charts.waste, 100.0, Color::Red);
    draw_phase(frame, parts[5], app);
}

fn draw_line_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &RollingSeries,
    y_max: f64,
    color: Color,
) {
    let points = series.points();
    let latest = series
        .latest()
        .map(|v| format!("{}({:.1}) ", title, v))
        .unwrap_or_else(|| title.to_string());

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(latest))
        .x_axis(Axis::default().bounds([0.0, (series.capacity().max(2) - 1) as f64]))
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![Span::raw("0"), Span::raw(format!("{:.0}", y_max))])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

fn draw_sparkline(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    series: &RollingSeries,
    max: Option<u64>,
    color: Color,
) {
    let data: Vec<u64> = series
        .iter()
        .map(|v| if v.is_finite() { v.max(0.0).round() as u64 } else { 0 })
        .collect();
    let latest = series
        .latest()
        .map(|v| format!("{}({:.1}) ", title, v))
        .unwrap_or_else(|| title.to_string());

    let mut sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(latest))
        .data(&data)
        .style(Style::default().fg(color));
    if let Some(max) = max {
        sparkline = sparkline.max(max);
    }

    frame.render_widget(sparkline, area);
}

fn draw_phase(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Phase Time ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let shares = app.controller.charts().phase.shares().unwrap_or([0.0; 3]);
    let colors = [Color::Gray, Color::White, ACCENT];
    for (i, share) in shares.iter().enumerate() {
        let ratio = share.clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(colors[i]).bg(Color::Black))
            .ratio(ratio)
            .label(format!("{} {:.0}%", PHASE_LABELS[i], ratio * 100.0));
        frame.render_widget(gauge, rows[i]);
    }
}
