use super::*;
use crate::app::action::Action;
use crate::app::command::{Command, TaskKey};
use crate::app::state::{AppState, Focus};
use crate::config::Config;
use crate::domain::directory::NameDirectory;
use crate::domain::models::{Direction, Page, Severity, Submission};
use crate::domain::sink::MockSubmissionSink;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn test_config() -> Config {
    Config {
        directory: NameDirectory::new(
            Some(vec![
                "Ada Lovelace".to_string(),
                "Alan Turing".to_string(),
                "Grace Hopper".to_string(),
            ]),
            vec![("C-1001".to_string(), "Grace Hopper".to_string())],
        ),
        areas: vec!["Library".to_string(), "Gym".to_string()],
        ..Default::default()
    }
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl_c() -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
}

#[tokio::test]
async fn test_handle_command_submit_success() {
    let mut mock = MockSubmissionSink::new();
    mock.expect_submit()
        .withf(|s| matches!(s, Submission::Area { area } if area == "Gym"))
        .returning(|_| Ok("Area selected: Gym".to_string()));

    let (tx, mut rx) = mpsc::channel(1);
    let mut scheduler = Scheduler::new(tx.clone());
    let submission = Submission::Area {
        area: "Gym".to_string(),
    };

    handle_command(
        Command::Submit(submission.clone()),
        &mut scheduler,
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert_eq!(
        action,
        Action::SubmissionAccepted(submission, "Area selected: Gym".to_string())
    );
}

#[tokio::test]
async fn test_handle_command_submit_error_propagation() {
    let mut mock = MockSubmissionSink::new();
    mock.expect_submit()
        .returning(|_| Err(anyhow::anyhow!("Server unavailable")));

    let (tx, mut rx) = mpsc::channel(1);
    let mut scheduler = Scheduler::new(tx.clone());

    handle_command(
        Command::Submit(Submission::Area {
            area: "Gym".to_string(),
        }),
        &mut scheduler,
        Arc::new(mock),
        tx,
    );

    let action = rx.recv().await.unwrap();
    if let Action::SubmissionRejected(_, message) = action {
        assert_eq!(message, "Server unavailable");
    } else {
        panic!("Expected Action::SubmissionRejected, got {action:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn test_schedule_and_cancel_commands() {
    let (tx, _rx) = mpsc::channel(1);
    let mut scheduler = Scheduler::new(tx.clone());
    let sink: Arc<dyn SubmissionSink> = Arc::new(MockSubmissionSink::new());

    handle_command(
        Command::Schedule {
            key: TaskKey::BlurGrace,
            after: Duration::from_millis(150),
        },
        &mut scheduler,
        sink.clone(),
        tx.clone(),
    );
    assert!(scheduler.is_pending(TaskKey::BlurGrace));

    handle_command(
        Command::Cancel(TaskKey::BlurGrace),
        &mut scheduler,
        sink,
        tx,
    );
    assert!(!scheduler.is_pending(TaskKey::BlurGrace));
}

#[tokio::test(start_paused = true)]
async fn test_full_rejection_to_state() {
    let mut mock = MockSubmissionSink::new();
    mock.expect_submit()
        .returning(|_| Err(anyhow::anyhow!("Server unavailable")));
    let sink: Arc<dyn SubmissionSink> = Arc::new(mock);

    let (tx, mut rx) = mpsc::channel(8);
    let mut scheduler = Scheduler::new(tx.clone());
    let mut state = AppState::new(&test_config());
    assert!(state.preselect_area("Library"));
    state.entry_form.text_area.set_value("Grace Hopper");

    // 1. Submitting disables the button and hands the entry to the sink
    for cmd in crate::app::reducer::update(&mut state, Action::SubmitEntry(1)) {
        handle_command(cmd, &mut scheduler, sink.clone(), tx.clone());
    }
    assert!(state.entry_form.buttons[1].disabled);
    assert!(scheduler.is_pending(TaskKey::SubmitFallback(1)));

    // 2. The rejection becomes an error flash; the page stays
    let action = rx.recv().await.unwrap();
    assert!(matches!(
        &action,
        Action::SubmissionRejected(
            Submission::Entry {
                direction: Direction::Out,
                ..
            },
            _
        )
    ));
    for cmd in crate::app::reducer::update(&mut state, action) {
        handle_command(cmd, &mut scheduler, sink.clone(), tx.clone());
    }
    assert_eq!(state.page, Page::SignIn);
    assert_eq!(state.entry_form.text_area.value(), "Grace Hopper");
    let flash = &state.notifications.items()[0];
    assert_eq!(flash.severity, Severity::Error);
    assert_eq!(flash.text, "Server unavailable");

    // 3. The fallback timer gives the button back after three seconds
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::Timer(TaskKey::SubmitFallback(1)));
    scheduler.complete(TaskKey::SubmitFallback(1));
    crate::app::reducer::update(&mut state, action);
    assert!(!state.entry_form.buttons[1].disabled);
    assert_eq!(state.entry_form.buttons[1].label, "Sign out");
}

#[tokio::test(start_paused = true)]
async fn test_scripted_sign_in() {
    let mut mock = MockSubmissionSink::new();
    mock.expect_submit()
        .withf(|s| {
            matches!(
                s,
                Submission::Entry { name, area: Some(area), direction: Direction::In, .. }
                    if name == "Alan Turing" && area == "Library"
            )
        })
        .times(1)
        .returning(|_| Ok("Signed in: Alan Turing at Library".to_string()));

    let mut state = AppState::new(&test_config());
    assert!(state.preselect_area("Library"));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let script = tokio::spawn(async move {
        // Let the initial focus land
        tokio::time::sleep(Duration::from_millis(200)).await;
        for event in [
            key(KeyCode::Char('a')),
            key(KeyCode::Char('l')),
            key(KeyCode::Char('a')),
            key(KeyCode::Down),
            key(KeyCode::Enter), // Pick "Alan Turing"
            key(KeyCode::Enter), // Submit
        ] {
            event_tx.send(Ok(event)).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    let final_state = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, state, Arc::new(mock), event_rx),
    )
    .await
    .expect("loop timed out")
    .unwrap();
    script.await.unwrap();

    assert!(final_state.should_quit);
    assert_eq!(final_state.page, Page::SignIn);
    // The page was reloaded: fresh form, confirmation flashed
    assert_eq!(final_state.entry_form.text_area.value(), "");
    assert!(final_state.entry_form.buttons.iter().all(|b| !b.disabled));
    assert_eq!(
        final_state.notifications.items()[0].text,
        "Signed in: Alan Turing at Library"
    );
}

#[tokio::test(start_paused = true)]
async fn test_unknown_name_shows_inline_error() {
    // No expectation: submitting would panic the mock
    let mock = MockSubmissionSink::new();
    let mut state = AppState::new(&test_config());
    assert!(state.preselect_area("Gym"));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let script = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        for c in "Nobody".chars() {
            event_tx.send(Ok(key(KeyCode::Char(c)))).await.unwrap();
        }
        event_tx.send(Ok(key(KeyCode::Enter))).await.unwrap();
        event_tx.send(Ok(ctrl_c())).await.unwrap();
    });

    let final_state = run_loop_with_events(&mut terminal, state, Arc::new(mock), event_rx)
        .await
        .unwrap();
    script.await.unwrap();

    assert!(final_state.entry_form.error.visible);
    assert_eq!(
        final_state.entry_form.error.text,
        "Name not found. Please select from the suggestions."
    );
    assert_eq!(final_state.focus, Focus::Entry);
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut mock = MockSubmissionSink::new();
    mock.expect_submit()
        .returning(|s| Ok(format!("Recorded {}", s.describe())));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::new(&test_config());

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=25 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx.send(Ok(ctrl_c())).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, Arc::new(mock), event_rx),
    )
    .await;

    match result {
        Ok(res) => {
            res.unwrap();
        }
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..16) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::Tab,
        9 => KeyCode::BackTab,
        10 => KeyCode::Delete,
        11 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Rare enough that the run is not cut short by Ctrl-C straight away
    if rng.gen_bool(0.02) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 | 1 => MouseEventKind::Down(MouseButton::Left),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
