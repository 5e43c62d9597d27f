use std::error::Error;
use std::time::{Duration, Instant};

use series::{apply_event, SessionEvent, SessionState};
use tokio::sync::mpsc;

use crate::config::Config;

const EVENT_CHANNEL_CAPACITY: usize = 256;
const RENDER_INTERVAL: Duration = Duration::from_millis(250);

pub async fn run_session(
    config: Config,
    form: submit::SimulationForm,
) -> Result<(), Box<dyn Error>> {
    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let subscription = feed::FeedSubscription::open(&config.feed_url, events_tx.clone()).await?;
    tracing::info!(url = %config.feed_url, "live feed connected");

    let renderer = ConsoleRenderer::new(config.chart_width, config.chart_height);
    let reducer = tokio::spawn(reduce_loop(events_rx, renderer));

    let client = submit::SimulationClient::new(config.api_url.clone());
    let _ = events_tx.send(SessionEvent::SubmitStarted).await;
    match client.submit(&form).await {
        Ok(outcome) => {
            let _ = events_tx.send(submit::outcome_event(&form, outcome)).await;
        }
        Err(err) => {
            tracing::error!(%err, "simulation request failed");
        }
    }
    // The busy flag clears on success and failure alike.
    let _ = events_tx.send(SessionEvent::SubmitFinished).await;

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    subscription.close().await;
    drop(events_tx);
    let _ = reducer.await;
    Ok(())
}

/// Owns the session state. Every mutation arrives as a `SessionEvent` on one
/// channel, so the feed task and the submitter never touch the state
/// concurrently. A producer that outlives the session hits a closed channel,
/// not stale state.
async fn reduce_loop(
    mut events: mpsc::Receiver<SessionEvent>,
    mut renderer: ConsoleRenderer,
) -> SessionState {
    let mut state = SessionState::default();
    while let Some(event) = events.recv().await {
        if let SessionEvent::FeedLost(reason) = &event {
            tracing::warn!(%reason, "live feed lost");
        }
        let force = matches!(
            event,
            SessionEvent::SimulationLoaded { .. } | SessionEvent::SubmitFinished
        );
        apply_event(&mut state, event);
        renderer.render(&state, force);
    }
    state
}

struct ConsoleRenderer {
    width: usize,
    height: usize,
    last_render: Option<Instant>,
}

impl ConsoleRenderer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            last_render: None,
        }
    }

    fn render(&mut self, state: &SessionState, force: bool) {
        if !force
            && self
                .last_render
                .is_some_and(|at| at.elapsed() < RENDER_INTERVAL)
        {
            return;
        }
        self.last_render = Some(Instant::now());

        let summary = view::summarize(state);
        let marker = match summary.direction {
            view::PriceDirection::Up => '+',
            view::PriceDirection::Down => '-',
        };
        println!(
            "\n{} [{marker}] initial {:.2} | final {:.2} | change {:+.2} | samples {}{}",
            display_name(state),
            summary.initial_price,
            summary.final_price,
            summary.change,
            summary.sample_count,
            if state.busy { " | simulating..." } else { "" },
        );
        print!(
            "{}",
            view::render_chart(&state.history, self.width, self.height)
        );
    }
}

fn display_name(state: &SessionState) -> &str {
    if state.name.is_empty() {
        "(unnamed)"
    } else {
        &state.name
    }
}
