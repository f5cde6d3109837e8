mod failure;
mod feedback;
mod map;
mod quiz;
mod result;

use std::io;

use ratatui::{Terminal, backend::Backend, prelude::*, widgets::Block};

use crate::presenter::{CompleteView, Presenter, QuestionView, ResultView};

pub use feedback::{QUIZ_OVER, wikipedia_link};
pub use quiz::pair_label;

/// Draws every view onto a ratatui terminal.
pub struct TerminalPresenter<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalPresenter<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B> TerminalPresenter<B>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    fn draw(&mut self, render: impl FnOnce(&mut Frame, Rect)) -> io::Result<()> {
        self.terminal
            .draw(|frame| {
                let area = frame.area();
                frame.render_widget(Block::default().bg(Color::Reset), area);
                render(frame, area);
            })
            .map(|_| ())
            .map_err(io::Error::other)
    }

    /// Show why the quiz could not start.
    pub fn render_startup_failure(&mut self, headline: &str, message: &str) -> io::Result<()> {
        self.draw(|frame, area| failure::render(frame, area, headline, message))
    }
}

impl<B> Presenter for TerminalPresenter<B>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    fn render_question(&mut self, view: &QuestionView<'_>) -> io::Result<()> {
        self.draw(|frame, area| quiz::render_question(frame, area, view))
    }

    fn render_result(&mut self, view: &ResultView<'_>) -> io::Result<()> {
        self.draw(|frame, area| quiz::render_result(frame, area, view))
    }

    fn render_complete(&mut self, view: &CompleteView<'_>) -> io::Result<()> {
        self.draw(|frame, area| result::render(frame, area, view))
    }
}
