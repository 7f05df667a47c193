use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, scheduler::Scheduler,
    state::AppState, ui,
};
use crate::domain::sink::SubmissionSink;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(100);

pub async fn run_loop<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'a>,
    sink: Arc<dyn SubmissionSink>,
) -> Result<AppState<'a>> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, sink, event_rx).await
}

pub async fn run_loop_with_events<'a, B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'a>,
    sink: Arc<dyn SubmissionSink>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState<'a>> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut scheduler = Scheduler::new(action_tx.clone());
    let mut interval = interval(TICK_RATE);

    // First frame, then wire the page up
    terminal.draw(|f| ui::draw(f, &mut app_state))?;
    for cmd in reducer::update(&mut app_state, Action::Ready) {
        handle_command(cmd, &mut scheduler, sink.clone(), action_tx.clone());
    }

    loop {
        // --- 1. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Timers and submission results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 2. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Timer(key) = &action {
                scheduler.complete(*key);
            }

            let commands = reducer::update(&mut app_state, action);
            if app_state.should_quit {
                break;
            }
            for cmd in commands {
                handle_command(cmd, &mut scheduler, sink.clone(), action_tx.clone());
            }
        }

        // --- 3. Render ---
        terminal.draw(|f| ui::draw(f, &mut app_state))?;
    }

    scheduler.cancel_all();
    tracing::info!("Event loop finished");
    Ok(app_state)
}

pub(crate) fn handle_command(
    command: Command,
    scheduler: &mut Scheduler,
    sink: Arc<dyn SubmissionSink>,
    tx: mpsc::Sender<Action>,
) {
    match command {
        Command::Schedule { key, after } => scheduler.schedule(key, after),
        Command::Cancel(key) => {
            scheduler.cancel(key);
        }
        Command::Submit(submission) => {
            tracing::debug!(submission = %submission.describe(), "Submitting");
            tokio::spawn(async move {
                let result = sink.submit(&submission).await;
                let action = match result {
                    Ok(message) => Action::SubmissionAccepted(submission, message),
                    Err(e) => Action::SubmissionRejected(submission, format!("{e}")),
                };
                let _ = tx.send(action).await;
            });
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
