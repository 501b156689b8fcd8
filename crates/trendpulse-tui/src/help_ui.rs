// Keybindings help popup
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use trendpulse_core::i18n::{Language, Text};

use crate::app::App;
use crate::ui::{centered_rect, tc};

pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let colors = &app.theme.colors;
    let lang = app.language;

    let popup_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, popup_area);

    let key = |k: &str, ko: &str, en: &str| -> Line<'static> {
        let desc = match lang {
            Language::Ko => ko,
            Language::En => en,
        };
        Line::from(vec![
            Span::styled(
                format!("  {:10}", k),
                Style::default()
                    .fg(tc(colors.tab_active))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(tc(colors.foreground))),
        ])
    };

    let lines = vec![
        Line::from(""),
        key("q", "종료", "Quit"),
        key("r", "수동 새로고침", "Manual refresh"),
        key("l", "한국어/English 전환", "Toggle Korean/English"),
        key("d", "다크/라이트 모드", "Toggle dark/light mode"),
        key("/", "키워드 필터 입력", "Edit keyword filter"),
        key("Tab", "카테고리 이동", "Next category"),
        key("S-Tab", "이전 카테고리", "Previous category"),
        key("j/k", "위/아래 이동", "Move selection"),
        key("s", "급상승 트렌드 선택", "Focus surge strip"),
        key("Enter", "상세 분석 열기", "Open detail panel"),
        key("o", "관련 항목 브라우저로", "Open related item URL"),
        key("Esc", "닫기", "Close popup / clear error"),
        key("?", "도움말", "Toggle this help"),
    ];

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", Text::HelpTitle.tr(lang)))
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(tc(colors.border_focused)))
                .style(Style::default().bg(tc(colors.background))),
        )
        .style(Style::default().fg(tc(colors.foreground)).bg(tc(colors.background)));

    frame.render_widget(help, popup_area);
}
