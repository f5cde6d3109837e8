use ohio_quiz::ui::{QUIZ_OVER, pair_label, wikipedia_link};
use ohio_quiz::{
    App, AppState, ComparisonRecord, Location, LocationPair, QuizError, QuizEvent, QuizOptions,
    QuizSession, SampleError, Side, TerminalPresenter, failure_headline,
};
use ratatui::{Terminal, backend::TestBackend};

fn pair(first: (&str, f64, f64), second: (&str, f64, f64), distance: f64) -> LocationPair {
    LocationPair {
        locations: [
            Location::new(first.0, first.1, first.2),
            Location::new(second.0, second.1, second.2),
        ],
        distance,
    }
}

fn lima_vs_lyon() -> ComparisonRecord {
    ComparisonRecord {
        ohio: pair(("Lima", 40.74, -84.11), ("Findlay", 41.04, -83.65), 50.0),
        abroad: pair(("Lyon", 45.76, 4.84), ("Geneva", 46.20, 6.14), 100.0),
        ratio: 0.5,
    }
}

fn athens_vs_pacific() -> ComparisonRecord {
    ComparisonRecord {
        ohio: pair(("Athens", 39.33, -82.10), ("Toledo", 41.65, -83.54), 290.0),
        abroad: pair(("Suva", -18.14, 178.44), ("Apia", -13.83, -171.76), 1150.0),
        ratio: 290.0 / 1150.0,
    }
}

fn presenter() -> TerminalPresenter<TestBackend> {
    TerminalPresenter::new(Terminal::new(TestBackend::new(160, 42)).unwrap())
}

fn app(records: Vec<ComparisonRecord>) -> App<TerminalPresenter<TestBackend>> {
    let options = QuizOptions {
        count: records.len(),
        seed: Some(1),
        ..QuizOptions::default()
    };
    let session = QuizSession::new(records, options).unwrap();
    App::new(session, presenter())
}

fn screen(presenter: &TerminalPresenter<TestBackend>) -> String {
    let buffer = presenter.terminal().backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn question_shows_both_pairs_and_score() {
    let mut app = app(vec![lima_vs_lyon()]);
    app.handle(QuizEvent::Redraw).unwrap();

    let text = screen(app.presenter());
    assert!(text.contains("Lima, Ohio ⇔ Findlay, Ohio"));
    assert!(text.contains("Lyon ⇔ Geneva"));
    assert!(text.contains("0 of 0 correct. (1 left)"));
    assert!(text.contains("1/1"));
    assert!(!text.contains("50 km"));
}

#[test]
fn missing_choice_shows_a_notice() {
    let mut app = app(vec![lima_vs_lyon()]);
    app.handle(QuizEvent::Check).unwrap();

    let text = screen(app.presenter());
    assert!(text.contains("no pair selected"));
    assert_eq!(app.state, AppState::Question);
}

#[test]
fn result_reveals_distances_and_links() {
    let mut app = app(vec![lima_vs_lyon()]);
    app.handle(QuizEvent::Choose(Side::Ohio)).unwrap();
    app.handle(QuizEvent::Check).unwrap();

    let text = screen(app.presenter());
    assert!(text.contains("Correct!"));
    assert!(text.contains("50 km"));
    assert!(text.contains("100 km"));
    assert!(text.contains("1 of 1 correct. (0 left)"));
    assert!(text.contains(QUIZ_OVER));
    assert!(text.contains("Find on Wikipedia"));
    assert!(text.contains(&wikipedia_link("Findlay, Ohio")));
    assert!(text.contains(&wikipedia_link("Geneva")));
}

#[test]
fn wrong_answer_is_marked() {
    let mut app = app(vec![lima_vs_lyon()]);
    app.handle(QuizEvent::Choose(Side::Abroad)).unwrap();
    app.handle(QuizEvent::Check).unwrap();

    let text = screen(app.presenter());
    assert!(text.contains("Not quite."));
    assert!(text.contains("✗ your pick"));
}

#[test]
fn pacific_route_renders_across_the_antimeridian() {
    let mut app = app(vec![athens_vs_pacific()]);
    app.handle(QuizEvent::Choose(Side::Ohio)).unwrap();
    app.handle(QuizEvent::Check).unwrap();

    let text = screen(app.presenter());
    assert!(text.contains("1150 km"));
}

#[test]
fn completion_screen_offers_restart() {
    let mut app = app(vec![lima_vs_lyon(), athens_vs_pacific()]);
    for _ in 0..2 {
        app.handle(QuizEvent::Choose(Side::Ohio)).unwrap();
        app.handle(QuizEvent::Check).unwrap();
        app.handle(QuizEvent::Next).unwrap();
    }

    assert_eq!(app.state, AppState::Complete);
    let text = screen(app.presenter());
    assert!(text.contains("RESULTS"));
    assert!(text.contains("2 / 2  (100%)"));
    assert!(text.contains("r restart"));

    app.handle(QuizEvent::Reset).unwrap();
    assert_eq!(app.state, AppState::Question);
    assert!(screen(app.presenter()).contains("0 of 0 correct. (2 left)"));
}

#[test]
fn load_failure_screen() {
    let mut presenter = presenter();
    presenter
        .render_startup_failure(
            "CANNOT LOAD DATA",
            "cannot read pairs_close.json: No such file or directory",
        )
        .unwrap();

    let text = screen(&presenter);
    assert!(text.contains("CANNOT LOAD DATA"));
    assert!(text.contains("cannot read pairs_close.json"));
}

#[test]
fn sampling_failure_screen_names_the_quiz() {
    let error: QuizError = SampleError::Insufficient {
        requested: 10,
        available: 3,
    }
    .into();
    let mut presenter = presenter();
    presenter
        .render_startup_failure(failure_headline(&error), &error.to_string())
        .unwrap();

    let text = screen(&presenter);
    assert!(text.contains("CANNOT BUILD QUIZ"));
    assert!(!text.contains("CANNOT LOAD DATA"));
    assert!(text.contains("cannot build a quiz of 10 questions"));
}

#[test]
fn labels_suffix_ohio_names_only() {
    let record = lima_vs_lyon();
    assert_eq!(pair_label(&record.ohio, Side::Ohio), "Lima, Ohio ⇔ Findlay, Ohio");
    assert_eq!(pair_label(&record.abroad, Side::Abroad), "Lyon ⇔ Geneva");
}
