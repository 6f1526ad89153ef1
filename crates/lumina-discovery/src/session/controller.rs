//! Single-owner update loop tying input, debounce, search and state together.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::debounce::Debouncer;
use super::state::{SearchSession, SearchState, SearchTicket};
use crate::aggregator::Aggregator;
use crate::models::{ResultFilter, UnifiedResult};

/// Capacity of the input event queue.
const EVENT_QUEUE: usize = 64;

/// Input to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Text typed into the search box; dispatched after the quiet period.
    Input(String),
    /// Back to the home view.
    Clear,
    /// Change the display filter.
    SetFilter(ResultFilter),
}

/// Runs searches on behalf of a view and publishes state snapshots.
#[derive(Debug, Clone)]
pub struct SearchController {
    aggregator: Arc<Aggregator>,
    debounce: Duration,
}

impl SearchController {
    /// Create a controller with the given debounce interval.
    #[must_use]
    pub fn new(aggregator: Arc<Aggregator>, debounce: Duration) -> Self {
        Self { aggregator, debounce }
    }

    /// Start the update loop on the current runtime.
    #[must_use]
    pub fn spawn(self) -> SearchHandle {
        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE);
        let (updates_tx, updates_rx) = watch::channel(SearchState::default());
        let task = tokio::spawn(self.run(events_rx, updates_tx));

        SearchHandle { events: events_tx, updates: updates_rx, task }
    }

    /// Process events until the sender side is dropped.
    ///
    /// Searches run as separate tasks; their completions come back through
    /// an internal channel and pass through [`SearchSession::complete`], so
    /// only the latest dispatched search can change the published results.
    pub async fn run(
        self,
        mut events: mpsc::Receiver<SearchEvent>,
        updates: watch::Sender<SearchState>,
    ) {
        let mut session = SearchSession::new();
        let mut debouncer = Debouncer::new(self.debounce);
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(SearchTicket, Vec<UnifiedResult>)>();

        loop {
            tokio::select! {
                event = events.recv() => {
                    let Some(event) = event else { break };
                    match event {
                        SearchEvent::Input(text) => {
                            session.set_query(&text);
                            debouncer.push(text);
                        }
                        SearchEvent::Clear => {
                            if debouncer.is_pending() {
                                tracing::debug!("Dropping unsettled input");
                            }
                            debouncer.cancel();
                            session.clear();
                        }
                        SearchEvent::SetFilter(filter) => session.set_filter(filter),
                    }
                }
                query = debouncer.settled() => {
                    if let Some(ticket) = session.begin(&query) {
                        tracing::info!(seq = ticket.seq(), query = %query, "Dispatching search");
                        let aggregator = Arc::clone(&self.aggregator);
                        let done = done_tx.clone();
                        tokio::spawn(async move {
                            let results = aggregator.search_resources(&query).await;
                            // The loop may already be gone; nothing to deliver to then
                            let _ = done.send((ticket, results));
                        });
                    }
                }
                Some((ticket, results)) = done_rx.recv() => {
                    session.complete(ticket, results);
                }
            }

            updates.send_replace(session.state().clone());
        }

        tracing::debug!("Search controller stopped");
    }
}

/// Handle to a spawned [`SearchController`].
#[derive(Debug)]
pub struct SearchHandle {
    events: mpsc::Sender<SearchEvent>,
    updates: watch::Receiver<SearchState>,
    task: JoinHandle<()>,
}

impl SearchHandle {
    /// Send an event to the controller.
    ///
    /// # Errors
    ///
    /// Returns the event back if the controller has stopped.
    pub async fn send(&self, event: SearchEvent) -> Result<(), mpsc::error::SendError<SearchEvent>> {
        self.events.send(event).await
    }

    /// Send typed text.
    ///
    /// # Errors
    ///
    /// Returns the event back if the controller has stopped.
    pub async fn input(&self, text: impl Into<String>) -> Result<(), mpsc::error::SendError<SearchEvent>> {
        self.send(SearchEvent::Input(text.into())).await
    }

    /// Subscribe to state snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.updates.clone()
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.updates.borrow().clone()
    }

    /// Stop accepting events and wait for the loop to finish.
    pub async fn shutdown(self) {
        drop(self.events);
        if let Err(error) = self.task.await {
            tracing::warn!(%error, "Search controller task failed");
        }
    }
}
