// UI rendering logic
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Tabs},
    Frame,
};

use trendpulse_core::chart::build_series;
use trendpulse_core::format::{format_change, format_count, format_interest};
use trendpulse_core::i18n::Text;
use trendpulse_core::theme;

use crate::app::{App, Focus, InputMode};

/// Core theme color to ratatui color.
pub fn tc(c: theme::Color) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Stats row
            Constraint::Length(6), // Surge strip
            Constraint::Min(10),   // Chart + filters + list
            Constraint::Length(1), // Status / error banner
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_stats(frame, app, chunks[1]);
    render_surges(frame, app, chunks[2]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[3]);

    render_chart(frame, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs
            Constraint::Length(3), // Keyword filter input
            Constraint::Min(4),    // Trend list
        ])
        .split(main_chunks[1]);

    render_category_tabs(frame, app, right_chunks[0]);
    render_keyword_filter(frame, app, right_chunks[1]);
    render_trend_list(frame, app, right_chunks[2]);

    render_status_bar(frame, app, chunks[4]);

    if app.detail_open() {
        crate::detail_ui::render_detail(frame, app, frame.area());
    }

    if app.show_help {
        crate::help_ui::render_help(frame, app, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            Text::HeaderTitle.tr(lang),
            Style::default()
                .fg(tc(colors.title))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            Text::HeaderSubtitle.tr(lang),
            Style::default().fg(tc(colors.subtitle)),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(tc(colors.border))));
    frame.render_widget(title, header_chunks[0]);

    let updated = app
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string());

    let indicators = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{}: {}", Text::LastUpdated.tr(lang), updated),
            Style::default().fg(tc(colors.foreground)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", lang.as_str().to_uppercase()),
            Style::default().fg(tc(colors.tab_active)),
        ),
        Span::styled(
            if app.dark_mode { " 🌙" } else { " ☀" },
            Style::default().fg(tc(colors.subtitle)),
        ),
    ]))
    .alignment(Alignment::Right)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(tc(colors.border))));
    frame.render_widget(indicators, header_chunks[1]);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let total_interest: u64 = app.visible.iter().map(|t| t.interest_score).sum();

    let mut spans = vec![
        Span::styled(
            format!("{}: {}", Text::StatsTrendCount.tr(lang), app.visible.len()),
            Style::default().fg(tc(colors.foreground)),
        ),
        Span::raw("   "),
        Span::styled(
            format!(
                "{}: {}",
                Text::StatsTotalInterest.tr(lang),
                format_interest(total_interest)
            ),
            Style::default().fg(tc(colors.selected)),
        ),
        Span::raw("   "),
        Span::styled(
            Text::StatsRefreshCadence.tr(lang),
            Style::default().fg(tc(colors.muted)),
        ),
    ];

    if let Some(stats) = app.snapshot.as_ref().and_then(|s| s.stats.as_ref()) {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!(
                "{}: {}  {}: {}  {}: {}",
                Text::StatsCollected.tr(lang),
                format_count(stats.total_collected),
                Text::StatsAnalyses.tr(lang),
                format_count(stats.total_analysis),
                Text::StatsRankings.tr(lang),
                format_count(stats.total_rankings),
            ),
            Style::default().fg(tc(colors.subtitle)),
        ));
    }

    let stats_bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(tc(colors.border))),
    );
    frame.render_widget(stats_bar, area);
}

fn render_surges(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Text::SurgeHeading.tr(lang))
        .border_style(Style::default().fg(if app.focus == Focus::Surges {
            tc(colors.border_focused)
        } else {
            tc(colors.border)
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let surges = match app.snapshot.as_ref() {
        Some(snapshot) if !snapshot.surges.is_empty() => &snapshot.surges,
        _ => {
            let placeholder = Paragraph::new(Text::ChartNoData.tr(lang))
                .style(Style::default().fg(tc(colors.muted)));
            frame.render_widget(placeholder, inner);
            return;
        }
    };

    let count = surges.len().min(5);
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count as u32); count])
        .split(inner);

    for (i, surge) in surges.iter().take(count).enumerate() {
        let selected = app.focus == Focus::Surges && app.surge_index == i;
        let style = if selected {
            Style::default()
                .fg(tc(colors.selected))
                .bg(tc(colors.selected_bg))
        } else {
            Style::default().fg(tc(colors.foreground))
        };

        let mut lines = vec![
            Line::from(Span::styled(
                surge.topic.clone(),
                style.add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format!("+{}%", surge.interest_change_rate.round() as i64),
                    Style::default().fg(tc(colors.change_up)),
                ),
                Span::styled(
                    format!("  {:.1}x", surge.interest_multiplier),
                    Style::default().fg(tc(colors.surge)),
                ),
            ]),
            Line::from(Span::styled(
                format!(
                    "{} #{} → #{}",
                    Text::SurgeRank.tr(lang),
                    surge.previous_rank,
                    surge.current_rank
                ),
                Style::default().fg(tc(colors.subtitle)),
            )),
        ];

        if let Some(reason) = &surge.surge_reason {
            lines.push(Line::from(Span::styled(
                reason.clone(),
                Style::default().fg(tc(colors.muted)),
            )));
        }

        let card = Paragraph::new(lines).style(style);
        frame.render_widget(card, card_chunks[i]);
    }
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Text::ChartHeading.tr(lang))
        .border_style(Style::default().fg(tc(colors.border)));

    let Some(series) = build_series(&app.visible, Local::now().naive_local()) else {
        let placeholder = Paragraph::new(Text::ChartNoData.tr(lang))
            .style(Style::default().fg(tc(colors.muted)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    // Datasets borrow their points, so materialize them first
    let point_sets: Vec<Vec<(f64, f64)>> = series
        .lines
        .iter()
        .map(|line| {
            line.values
                .iter()
                .enumerate()
                .map(|(i, &v)| (i as f64, v as f64))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .lines
        .iter()
        .zip(point_sets.iter())
        .enumerate()
        .map(|(i, (line, points))| {
            Dataset::default()
                .name(line.keyword.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(tc(colors.chart[i % colors.chart.len()])))
                .data(points)
        })
        .collect();

    let max = series.max_value().max(1) as f64;
    let mid_label = series.labels[series.labels.len() / 2].clone();

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(tc(colors.muted)))
                .bounds([0.0, 11.0])
                .labels(vec![
                    Span::raw(series.labels.first().cloned().unwrap_or_default()),
                    Span::raw(mid_label),
                    Span::raw(series.labels.last().cloned().unwrap_or_default()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(tc(colors.muted)))
                .bounds([0.0, max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format_interest((max / 2.0) as u64)),
                    Span::raw(format_interest(max as u64)),
                ]),
        );

    frame.render_widget(chart, area);
}

fn render_category_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let titles: Vec<Line> = app
        .categories
        .iter()
        .map(|c| Line::from(c.label(lang)))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.category_index)
        .style(Style::default().fg(tc(colors.tab_inactive)))
        .highlight_style(
            Style::default()
                .fg(tc(colors.tab_active))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Text::FilterCategory.tr(lang))
                .border_style(Style::default().fg(tc(colors.border))),
        );
    frame.render_widget(tabs, area);
}

fn render_keyword_filter(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;
    let editing = app.input_mode == InputMode::Filtering;

    let content = if app.keyword_input.is_empty() && !editing {
        Span::styled(
            Text::FilterKeywordHint.tr(lang),
            Style::default().fg(tc(colors.muted)),
        )
    } else {
        Span::styled(
            app.keyword_input.clone(),
            Style::default().fg(tc(colors.foreground)),
        )
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Text::FilterKeyword.tr(lang))
            .border_style(Style::default().fg(if editing {
                tc(colors.border_focused)
            } else {
                tc(colors.border)
            })),
    );
    frame.render_widget(input, area);
}

fn render_trend_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Text::ListHeading.tr(lang))
        .border_style(Style::default().fg(if app.focus == Focus::Trends {
            tc(colors.border_focused)
        } else {
            tc(colors.border)
        }));

    if app.is_first_load() {
        let loading = Paragraph::new(Text::Loading.tr(lang))
            .style(Style::default().fg(tc(colors.muted)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .enumerate()
        .map(|(i, trend)| {
            let change_color = if trend.change >= 0 {
                tc(colors.change_up)
            } else {
                tc(colors.change_down)
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>2}. ", i + 1),
                    Style::default().fg(tc(colors.muted)),
                ),
                Span::styled(
                    format!("{:<24}", trend.keyword),
                    Style::default()
                        .fg(tc(colors.foreground))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<12}", trend.category.label(lang)),
                    Style::default().fg(tc(colors.tab_active)),
                ),
                Span::styled(
                    format!("{:>8}  ", format_interest(trend.interest_score)),
                    Style::default().fg(tc(colors.selected)),
                ),
                Span::styled(
                    format!("{:>6}  ", format_change(trend.change)),
                    Style::default().fg(change_color),
                ),
                Span::styled(
                    format!("{:<20}", trend.platform),
                    Style::default().fg(tc(colors.subtitle)),
                ),
                Span::styled(
                    trend.sentiment.clone(),
                    Style::default().fg(tc(colors.muted)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(tc(colors.selected_bg))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let status = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            error.clone(),
            Style::default()
                .fg(tc(colors.error))
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            Text::HelpHint.tr(lang),
            Style::default().fg(tc(colors.muted)),
        ))
    };

    frame.render_widget(Paragraph::new(status), area);
}

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
