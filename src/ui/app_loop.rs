//! Terminal setup and the interactive event loop.
//!
//! The loop owns the single logical thread of control: it polls terminal
//! events, drains request settlements from the mpsc channel, ticks the
//! animators, and redraws. Analysis requests run on spawned tasks and only
//! communicate back through the channel.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use ratatui::crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::api::client::request_analysis;
use crate::core::app::{App, AppOptions, PendingRequest, RequestOutcome};
use crate::ui::renderer::ui;

struct RequestParams {
    client: reqwest::Client,
    endpoint: String,
    pending: PendingRequest,
    tx: mpsc::UnboundedSender<(u64, RequestOutcome)>,
}

fn spawn_request(params: RequestParams) {
    let RequestParams {
        client,
        endpoint,
        pending,
        tx,
    } = params;
    let PendingRequest {
        product_url,
        cancel_token,
        request_id,
    } = pending;

    tokio::spawn(async move {
        tokio::select! {
            outcome = request_analysis(&client, &endpoint, &product_url) => {
                match outcome {
                    Ok(report) => {
                        let _ = tx.send((request_id, RequestOutcome::Report(report)));
                    }
                    Err(e) => {
                        tracing::error!(url = %product_url, error = %e, "analysis request failed");
                        let _ = tx.send((request_id, RequestOutcome::Failed(e.to_string())));
                    }
                }
            }
            _ = cancel_token.cancelled() => {}
        }
    });
}

pub async fn run_app(options: AppOptions) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(options)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<(u64, RequestOutcome)>();

    let result = event_loop(&mut terminal, &mut app, &tx, &mut rx).await;

    // Teardown cancels any in-flight request; its settlement would be stale
    // anyway, and the task stops instead of outliving the view.
    app.cancel_current_request();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tx: &mpsc::UnboundedSender<(u64, RequestOutcome)>,
    rx: &mut mpsc::UnboundedReceiver<(u64, RequestOutcome)>,
) -> Result<(), Box<dyn Error>> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break Ok(());
                    }
                    KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.move_cursor_to_beginning();
                    }
                    KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.move_cursor_to_end();
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.clear_input();
                    }
                    KeyCode::Esc => {
                        app.cancel_current_request();
                    }
                    KeyCode::Enter => {
                        if let Some(pending) = app.begin_submission() {
                            spawn_request(RequestParams {
                                client: app.client.clone(),
                                endpoint: app.endpoint.clone(),
                                pending,
                                tx: tx.clone(),
                            });
                        }
                    }
                    KeyCode::Tab => app.cycle_category(true),
                    KeyCode::BackTab => app.cycle_category(false),
                    KeyCode::Up => app.scroll_details(-1),
                    KeyCode::Down => app.scroll_details(1),
                    KeyCode::Left => app.move_cursor_left(),
                    KeyCode::Right => app.move_cursor_right(),
                    KeyCode::Home => app.move_cursor_to_beginning(),
                    KeyCode::End => app.move_cursor_to_end(),
                    KeyCode::Backspace => {
                        app.delete_char_before_cursor();
                    }
                    KeyCode::Char(c)
                        if !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        app.insert_char_at_cursor(c);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.scroll_details(-3),
                    MouseEventKind::ScrollDown => app.scroll_details(3),
                    _ => {}
                },
                Event::Paste(text) => {
                    // The URL field is a single line; strip any pasted breaks.
                    app.insert_str_at_cursor(&text.replace(['\r', '\n'], ""));
                }
                _ => {}
            }
        }

        // Drain settled requests; stale ids are discarded inside the app.
        while let Ok((request_id, outcome)) = rx.try_recv() {
            app.handle_request_event(request_id, outcome, Instant::now());
        }
    }
}
