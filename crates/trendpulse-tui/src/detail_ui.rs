// Topic detail popup
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use trendpulse_core::format::{format_count, format_interest};
use trendpulse_core::i18n::Text;

use crate::app::{App, DetailState};
use crate::ui::{centered_rect, tc};

/// Render the centered detail popup: analysis paragraphs, statistics,
/// keywords and related items, or the loading / summary-fallback states.
pub fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let popup_area = centered_rect(80, 80, area);
    frame.render_widget(Clear, popup_area);

    let topic = app.selected_topic.as_deref().unwrap_or("");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} · {} ", Text::DetailHeading.tr(lang), topic))
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(tc(colors.border_focused)))
        .style(Style::default().bg(tc(colors.background)));

    let mut lines: Vec<Line> = Vec::new();

    match &app.detail {
        DetailState::Hidden => return,
        DetailState::Loading => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                Text::DetailLoading.tr(lang),
                Style::default().fg(tc(colors.muted)),
            )));
        }
        DetailState::Loaded { view, error } => {
            if let Some(message) = error {
                lines.push(Line::from(Span::styled(
                    format!("{}: {}", Text::DetailError.tr(lang), message),
                    Style::default()
                        .fg(tc(colors.error))
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(""));
            }

            let section = |title: &str| {
                Line::from(Span::styled(
                    title.to_string(),
                    Style::default()
                        .fg(tc(colors.title))
                        .add_modifier(Modifier::BOLD),
                ))
            };

            let analysis_fields = [
                (Text::DetailWhat, view.what.as_deref()),
                (Text::DetailWhyNow, view.why_now.as_deref()),
                (Text::DetailContext, view.context.as_deref()),
                (Text::DetailAnalysis, view.description.as_deref()),
            ];
            for (label, text) in analysis_fields {
                if let Some(text) = text {
                    lines.push(section(label.tr(lang)));
                    lines.push(Line::from(Span::styled(
                        text.to_string(),
                        Style::default().fg(tc(colors.foreground)),
                    )));
                    lines.push(Line::from(""));
                }
            }

            lines.push(section(Text::DetailStatistics.tr(lang)));
            let mut stats_spans = vec![Span::styled(
                format!(
                    "{}: {}",
                    Text::DetailInterest.tr(lang),
                    format_interest(view.interest)
                ),
                Style::default().fg(tc(colors.selected)),
            )];
            if let Some(mentions) = view.mentions {
                stats_spans.push(Span::styled(
                    format!("   {}", format_count(mentions)),
                    Style::default().fg(tc(colors.subtitle)),
                ));
            }
            lines.push(Line::from(stats_spans));

            if !view.source_distribution.is_empty() {
                let mut sources: Vec<_> = view.source_distribution.iter().collect();
                sources.sort_by(|a, b| b.1.cmp(a.1));
                lines.push(Line::from(Span::styled(
                    format!(
                        "{}: {}",
                        Text::DetailSourceDist.tr(lang),
                        sources
                            .iter()
                            .map(|(name, count)| format!("{} {}", name, count))
                            .collect::<Vec<_>>()
                            .join("  ")
                    ),
                    Style::default().fg(tc(colors.subtitle)),
                )));
            }

            if !view.sentiment_distribution.is_empty() {
                let mut sentiments: Vec<_> = view.sentiment_distribution.iter().collect();
                sentiments.sort_by(|a, b| b.1.cmp(a.1));
                lines.push(Line::from(Span::styled(
                    format!(
                        "{}: {}",
                        Text::DetailSentimentDist.tr(lang),
                        sentiments
                            .iter()
                            .map(|(name, count)| format!("{} {}", name, count))
                            .collect::<Vec<_>>()
                            .join("  ")
                    ),
                    Style::default().fg(tc(colors.subtitle)),
                )));
            }
            lines.push(Line::from(""));

            if !view.keywords.is_empty() {
                lines.push(section(Text::DetailKeywords.tr(lang)));
                lines.push(Line::from(Span::styled(
                    view.keywords
                        .iter()
                        .map(|k| format!("{} ({})", k.keyword, k.count))
                        .collect::<Vec<_>>()
                        .join("  "),
                    Style::default().fg(tc(colors.tab_active)),
                )));
                lines.push(Line::from(""));
            }

            if !view.related_items.is_empty() {
                lines.push(section(Text::DetailRelated.tr(lang)));
                for (i, item) in view.related_items.iter().enumerate() {
                    let selected = i == app.related_index;
                    let marker = if selected { "▶ " } else { "  " };
                    let style = if selected {
                        Style::default()
                            .fg(tc(colors.selected))
                            .bg(tc(colors.selected_bg))
                    } else {
                        Style::default().fg(tc(colors.foreground))
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!("{}{}", marker, item.title), style),
                        Span::styled(
                            format!("  [{}]", item.source_type),
                            Style::default().fg(tc(colors.muted)),
                        ),
                    ]));
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(tc(colors.foreground)).bg(tc(colors.background)));

    frame.render_widget(paragraph, popup_area);
}
