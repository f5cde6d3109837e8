use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::{feedback, map};
use crate::models::{AnswerOutcome, ComparisonRecord, LocationPair, Score, Side};
use crate::presenter::{QuestionView, ResultView};

const PAIR_SEPARATOR: &str = " ⇔ ";

/// What has been revealed about the current record.
#[derive(Clone, Copy)]
struct Reveal {
    chosen: Side,
    outcome: AnswerOutcome,
}

pub fn render_question(frame: &mut Frame, area: Rect, view: &QuestionView<'_>) {
    let chunks = create_layout(area);

    render_progress(frame, chunks[0], view.number, view.score);
    render_pairs(frame, chunks[1], view.record, view.selected, None);
    feedback::render_question(frame, chunks[2], view.notice);
    render_controls(frame, chunks[3], "o/a choose  ·  tab toggle  ·  enter check  ·  r restart  ·  q quit");
}

pub fn render_result(frame: &mut Frame, area: Rect, view: &ResultView<'_>) {
    let chunks = create_layout(area);
    let reveal = Reveal {
        chosen: view.chosen,
        outcome: view.outcome,
    };

    render_progress(frame, chunks[0], view.number, view.score);
    render_pairs(frame, chunks[1], view.record, Some(view.chosen), Some(reveal));
    feedback::render_result(frame, chunks[2], view);

    let controls = if view.has_next {
        "enter next  ·  r restart  ·  q quit"
    } else {
        "enter summary  ·  r restart  ·  q quit"
    };
    render_controls(frame, chunks[3], controls);
}

fn create_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area)
}

fn render_progress(frame: &mut Frame, area: Rect, number: usize, score: Score) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(area);

    let summary = Paragraph::new(score.to_string()).fg(Color::Gray);
    frame.render_widget(summary, left);

    let progress = Paragraph::new(format!("{}/{}", number, score.total))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, right);
}

fn render_pairs(
    frame: &mut Frame,
    area: Rect,
    record: &ComparisonRecord,
    selected: Option<Side>,
    reveal: Option<Reveal>,
) {
    let [ohio, abroad] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    render_pair_panel(frame, ohio, record, Side::Ohio, selected, reveal);
    render_pair_panel(frame, abroad, record, Side::Abroad, selected, reveal);
}

fn render_pair_panel(
    frame: &mut Frame,
    area: Rect,
    record: &ComparisonRecord,
    side: Side,
    selected: Option<Side>,
    reveal: Option<Reveal>,
) {
    let pair = record.pair(side);
    let is_shorter = reveal.is_some_and(|reveal| reveal.outcome.correct_side == side);
    let border_color = if is_shorter { Color::Green } else { Color::DarkGray };

    let block = Block::default()
        .title(region_title(side))
        .borders(Borders::ALL)
        .border_style(border_color)
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [choice, distance, map_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    render_choice(frame, choice, pair, side, selected == Some(side));
    render_distance(frame, distance, pair, side, reveal);
    map::render(frame, map_area, pair, side, reveal.is_some());
}

fn region_title(side: Side) -> &'static str {
    match side {
        Side::Ohio => " Ohio ",
        Side::Abroad => " Abroad ",
    }
}

/// `Lima, Ohio ⇔ Findlay, Ohio` for Ohio pairs, bare names abroad.
pub fn pair_label(pair: &LocationPair, side: Side) -> String {
    let names = pair.names();
    match side {
        Side::Ohio => format!("{}, Ohio{}{}, Ohio", names[0], PAIR_SEPARATOR, names[1]),
        Side::Abroad => format!("{}{}{}", names[0], PAIR_SEPARATOR, names[1]),
    }
}

fn render_choice(frame: &mut Frame, area: Rect, pair: &LocationPair, side: Side, is_selected: bool) {
    let style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if is_selected { "(•) " } else { "( ) " };

    let line = Line::from(vec![
        Span::styled(marker, style),
        Span::styled(pair_label(pair, side), style),
    ]);
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

fn render_distance(frame: &mut Frame, area: Rect, pair: &LocationPair, side: Side, reveal: Option<Reveal>) {
    let Some(reveal) = reveal else {
        return;
    };

    let mut spans = vec![Span::styled(
        format!("{:.0} km", pair.distance),
        Style::default().fg(Color::White).bold(),
    )];
    if reveal.chosen == side {
        let (mood, color) = if reveal.outcome.correct {
            ("  ✓ your pick", Color::Green)
        } else {
            ("  ✗ your pick", Color::Red)
        };
        spans.push(Span::styled(mood, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
