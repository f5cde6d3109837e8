use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use super::feedback::QUIZ_OVER;
use crate::models::{ComparisonRecord, Side};
use crate::presenter::CompleteView;

const PREVIEW_LENGTH: usize = 60;

pub fn render(frame: &mut Frame, area: Rect, view: &CompleteView<'_>) {
    let percentage = view.score.percentage();
    let grade_color = get_grade_color(percentage);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], view, percentage, grade_color);
    render_question_breakdown(frame, chunks[2], view);
    render_notice(frame, chunks[3], view.notice);
    render_controls(frame, chunks[4]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    view: &CompleteView<'_>,
    percentage: f64,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                view.score.correct, view.score.total, percentage
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(QUIZ_OVER.fg(Color::DarkGray)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, view: &CompleteView<'_>) {
    let lines: Vec<Line> = view
        .history
        .iter()
        .enumerate()
        .map(|(index, (record, answer))| {
            let (symbol, color) = match answer {
                Some(side) if *side == record.correct_side() => ("+", Color::Green),
                Some(_) => ("-", Color::Red),
                None => ("·", Color::DarkGray),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(truncate(&describe(record)), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll_offset(view.scroll), 0));
    frame.render_widget(widget, area);
}

fn scroll_offset(scroll: usize) -> u16 {
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

fn describe(record: &ComparisonRecord) -> String {
    let closer = match record.correct_side() {
        Side::Ohio => "Ohio",
        Side::Abroad => "abroad",
    };
    let [ohio_first, ohio_second] = record.ohio.names();
    let [abroad_first, abroad_second] = record.abroad.names();
    format!(
        "{ohio_first}–{ohio_second} {:.0} km vs {abroad_first}–{abroad_second} {:.0} km ({closer})",
        record.ohio.distance, record.abroad.distance
    )
}

fn truncate(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > PREVIEW_LENGTH {
        let truncated: String = text.chars().take(PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    if let Some(notice) = notice {
        let widget = Paragraph::new(notice.to_string())
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(widget, area);
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
