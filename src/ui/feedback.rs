use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use url::Url;

use crate::models::{ComparisonRecord, Side};
use crate::presenter::ResultView;

const WIKIPEDIA_SEARCH: &str = "https://en.wikipedia.org/w/index.php";
pub const QUIZ_OVER: &str = "Quiz over, you have answered for all pairs!";

/// Search link rather than an article link, so missing pages still land somewhere useful.
pub fn wikipedia_link(name: &str) -> String {
    Url::parse_with_params(WIKIPEDIA_SEARCH, &[("search", name)])
        .map(String::from)
        .unwrap_or_else(|_| WIKIPEDIA_SEARCH.to_string())
}

fn search_names(record: &ComparisonRecord) -> [String; 4] {
    let [ohio_first, ohio_second] = record.ohio.names();
    let [abroad_first, abroad_second] = record.abroad.names();
    [
        format!("{ohio_first}, Ohio"),
        format!("{ohio_second}, Ohio"),
        abroad_first.to_string(),
        abroad_second.to_string(),
    ]
}

fn panel() -> Block<'static> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1))
}

pub fn render_question(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let line = match notice {
        Some(notice) => Line::from(Span::styled(notice.to_string(), Style::default().fg(Color::Yellow))),
        None => Line::from("Which pair is closer together?".fg(Color::Gray)),
    };

    frame.render_widget(Paragraph::new(line).block(panel()), area);
}

pub fn render_result(frame: &mut Frame, area: Rect, view: &ResultView<'_>) {
    let block = panel();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [verdict, links] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);

    render_verdict(frame, verdict, view);
    render_links(frame, links, view.record);
}

fn render_verdict(frame: &mut Frame, area: Rect, view: &ResultView<'_>) {
    let (headline, color) = if view.outcome.correct {
        ("Correct!", Color::Green)
    } else {
        ("Not quite.", Color::Red)
    };
    let shorter = match view.outcome.correct_side {
        Side::Ohio => "The Ohio pair",
        Side::Abroad => "The abroad pair",
    };

    let mut lines = vec![
        Line::from(Span::styled(headline, Style::default().fg(color).bold())),
        Line::from(format!(
            "{shorter} is closer: {:.0} km in Ohio, {:.0} km abroad.",
            view.record.ohio.distance, view.record.abroad.distance
        )),
        Line::from(""),
        Line::from(Span::styled(
            view.score.to_string(),
            Style::default().fg(Color::White),
        )),
    ];

    if !view.has_next {
        lines.push(Line::from(Span::styled(
            QUIZ_OVER,
            Style::default().fg(Color::Cyan).bold(),
        )));
    }
    if let Some(notice) = view.notice {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_links(frame: &mut Frame, area: Rect, record: &ComparisonRecord) {
    let mut lines = vec![Line::from(Span::styled(
        "Find on Wikipedia",
        Style::default().fg(Color::Cyan).bold(),
    ))];
    lines.extend(search_names(record).iter().map(|name| {
        Line::from(Span::styled(
            wikipedia_link(name),
            Style::default().fg(Color::Blue).underlined(),
        ))
    }));

    frame.render_widget(Paragraph::new(lines), area);
}
