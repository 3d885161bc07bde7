//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table};

use super::runtime::{App, ChartKind};
use super::style;

/// Renders the full dashboard frame.
pub fn render(frame: &mut Frame, app: &App) {
    let table_height = app.model.outlet_count() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // header
            Constraint::Length(table_height), // outlet table
            Constraint::Min(10),              // chart
            Constraint::Length(4),            // billing panel
            Constraint::Length(1),            // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_chart(frame, app, chunks[2]);
    render_billing(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: title, window length, tariff, chart kind.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " OUTLET-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(&app.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            " │ {} outlets │ {} days │ tariff {}/kWh │ chart: {} ",
            app.model.outlet_count(),
            app.model.days(),
            app.model.tariff_rate(),
            app.chart.label(),
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Live outlet table with the selection cursor.
fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["", "Outlet", "Device", "State", "Draw (kWh)"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .model
        .readings()
        .into_iter()
        .map(|r| {
            let cursor = if r.index == app.selected { "▸" } else { " " };
            let (state, state_color) = if r.is_on {
                ("ON", style::ON_COLOR)
            } else {
                ("OFF", style::OFF_COLOR)
            };
            let row = Row::new(vec![
                Span::raw(cursor.to_string()),
                Span::raw(r.label),
                Span::raw(r.device_name),
                Span::styled(state.to_string(), Style::default().fg(state_color)),
                Span::raw(format!("{:.2}", r.current_draw_kwh)),
            ]);
            if r.index == app.selected {
                row.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(1),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Length(5),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" State and current draw ")
            .borders(Borders::ALL),
    );

    frame.render_widget(table, area);
}

/// Daily consumption chart: one line per outlet, or house totals as bars.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let model = &app.model;
    let days = model.days();

    // Owned point vectors for the datasets rendered this frame
    let series_points: Vec<Vec<(f64, f64)>> = match app.chart {
        ChartKind::Lines => (0..model.outlet_count())
            .map(|index| {
                model
                    .displayed_series(index)
                    .unwrap_or_default()
                    .into_iter()
                    .enumerate()
                    .map(|(day, kwh)| (day as f64, kwh))
                    .collect()
            })
            .collect(),
        ChartKind::Bars => vec![
            model
                .daily_totals()
                .into_iter()
                .enumerate()
                .map(|(day, kwh)| (day as f64, kwh))
                .collect(),
        ],
    };

    let datasets: Vec<Dataset> = match app.chart {
        ChartKind::Lines => series_points
            .iter()
            .enumerate()
            .map(|(index, points)| {
                Dataset::default()
                    .name(model.outlets()[index].label.as_str())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(style::series_color(index)))
                    .data(points)
            })
            .collect(),
        ChartKind::Bars => series_points
            .iter()
            .map(|points| {
                Dataset::default()
                    .name("House total")
                    .marker(symbols::Marker::HalfBlock)
                    .graph_type(GraphType::Bar)
                    .style(Style::default().fg(style::HOUSE_COLOR))
                    .data(points)
            })
            .collect(),
    };

    let y_bounds = style::auto_bounds_y(&series_points);
    let x_hi = (days.saturating_sub(1)) as f64;

    let x_label_lo = model.day_labels().first().cloned().unwrap_or_default();
    let x_label_hi = model.day_labels().last().cloned().unwrap_or_default();
    let y_label_lo = format!("{:.1}", y_bounds[0]);
    let y_label_hi = format!("{:.1}", y_bounds[1]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Daily consumption ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("day")
                .bounds([0.0, x_hi.max(1.0)])
                .labels(vec![x_label_lo, x_label_hi]),
        )
        .y_axis(
            Axis::default()
                .title("kWh")
                .bounds(y_bounds)
                .labels(vec![y_label_lo, y_label_hi]),
        );

    frame.render_widget(chart, area);
}

/// Billing panel: the selected outlet's line plus the house totals.
fn render_billing(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.model.billing_summary();
    let selected = summary.lines.get(app.selected);

    let lines = vec![
        Line::from(selected.map_or_else(
            || "  (no outlet selected)".to_string(),
            |line| {
                format!(
                    "  {} ({}): {:.2} kWh  ${:.0}",
                    line.label, line.device_name, line.total_kwh, line.total_cost
                )
            },
        )),
        Line::from(format!(
            "  House month total: {:.2} kWh  ${:.0}",
            summary.house_kwh, summary.house_cost
        )),
    ];

    let block = Block::default().title(" Billing ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  Space:Toggle  1-9:Toggle  r:Refresh  c:Chart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
