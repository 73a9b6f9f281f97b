//! Profile screen: owns the lookup state and the task that feeds it.
//!
//! Each activation spawns one tokio task that performs the lookup and posts
//! a [`ProfileIntent::Settled`] back over a channel. The task is bound to the
//! screen: a new activation, [`ProfileScreen::close`], or dropping the screen
//! aborts it, and any settle already queued is discarded.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::genderize::GenderizeClient;
use crate::ui::mvi::Reducer;

use super::intent::ProfileIntent;
use super::reducer::ProfileReducer;
use super::state::ProfileState;

pub struct ProfileScreen {
    client: GenderizeClient,
    state: ProfileState,
    task: Option<JoinHandle<()>>,
    /// Bumped on every activation and close; settles from older
    /// generations are dropped.
    generation: u64,
    events_tx: mpsc::UnboundedSender<(u64, ProfileIntent)>,
    events_rx: mpsc::UnboundedReceiver<(u64, ProfileIntent)>,
}

impl ProfileScreen {
    pub fn new(client: GenderizeClient) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: ProfileState::default(),
            task: None,
            generation: 0,
            events_tx,
            events_rx,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    /// True while a lookup task is alive.
    pub fn is_fetching(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Show the screen for `name`.
    ///
    /// Starts a lookup unless the screen is already keyed by `name`.
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self, name: &str) {
        if self.state.name() == Some(name) {
            return;
        }

        self.cancel();
        self.dispatch(ProfileIntent::Activate {
            name: name.to_string(),
        });

        let generation = self.generation;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let name = name.to_string();
        let span = tracing::info_span!(
            "gender_lookup",
            request_id = %uuid::Uuid::new_v4(),
            name = %name
        );

        self.task = Some(tokio::spawn(
            async move {
                let result = client.fetch_gender(&name).await;
                if let Err(err) = &result {
                    tracing::warn!(error = %err, "Gender lookup failed");
                }
                // Receiver gone means the screen was dropped
                let _ = tx.send((generation, ProfileIntent::Settled { name, result }));
            }
            .instrument(span),
        ));
    }

    /// Leave the screen: abort the lookup and forget its result.
    pub fn close(&mut self) {
        self.cancel();
        self.dispatch(ProfileIntent::Reset);
    }

    /// Wait for the next settle and apply it.
    ///
    /// Never resolves while no lookup is pending.
    pub async fn next_update(&mut self) -> &ProfileState {
        while let Some((generation, intent)) = self.events_rx.recv().await {
            if generation == self.generation {
                self.dispatch(intent);
                self.task = None;
                break;
            }
        }
        &self.state
    }

    /// Apply any settles that already arrived, without waiting.
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let before = self.state.clone();
        while let Ok((generation, intent)) = self.events_rx.try_recv() {
            if generation == self.generation {
                self.dispatch(intent);
                self.task = None;
            }
        }
        before != self.state
    }

    fn dispatch(&mut self, intent: ProfileIntent) {
        self.state = ProfileReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Aborting in-flight gender lookup");
            }
            task.abort();
        }
        self.generation += 1;
        while self.events_rx.try_recv().is_ok() {}
    }
}

impl Drop for ProfileScreen {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
