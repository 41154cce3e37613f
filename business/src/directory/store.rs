//! The Directory Store: sole writer of [`DirectoryState`].
//!
//! The store is constructed explicitly and handed to whoever renders the
//! directory. It publishes state through a `tokio::sync::watch` channel and
//! keeps the only sender, so consumers can observe but never write.
//!
//! Operations never return errors. Failures are announced on the notification
//! channel by the gateway and surface here as `false` / `None`, plus the
//! readable `error` field for page fetches.

use chrono::Utc;
use log::{error, info, warn};
use tokio::sync::watch;

use super::sequence::{RequestSequence, Ticket};
use super::state::{DirectoryState, total_pages_for};
use crate::gateway::UserGateway;
use crate::model::{PAGE_SIZE, User, UserDraft};
use crate::notify::{Notification, Notifier};

/// Read-only handle on the directory.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    receiver: watch::Receiver<DirectoryState>,
}

impl DirectoryView {
    /// Borrows the latest published state. Do not hold across an `.await`.
    pub fn current(&self) -> watch::Ref<'_, DirectoryState> {
        self.receiver.borrow()
    }

    pub fn snapshot(&self) -> DirectoryState {
        self.receiver.borrow().clone()
    }

    /// Whether a new state was published since this view last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next publish and marks it seen. Returns `false` once the
    /// store is gone.
    pub async fn changed(&mut self) -> bool {
        self.receiver.changed().await.is_ok()
    }
}

enum FetchOutcome {
    Applied,
    /// The requested page does not exist; carries the last page that does.
    PastEnd(u32),
    Failed,
    Discarded,
}

/// Clears the loading flag if a fetch is dropped while its request is in
/// flight and no newer fetch has been issued since.
struct InFlight<'a> {
    state: &'a watch::Sender<DirectoryState>,
    sequence: &'a RequestSequence,
    ticket: Ticket,
    armed: bool,
}

impl InFlight<'_> {
    fn land(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed || !self.sequence.is_latest(self.ticket) {
            return;
        }
        warn!(
            "DirectoryStore: request #{} dropped before completing",
            self.ticket.value()
        );
        self.state.send_if_modified(DirectoryState::stop_loading);
    }
}

/// Owner and sole writer of the directory state.
///
/// Hand it by reference to whatever drives the directory; readers take a
/// [`DirectoryView`].
pub struct DirectoryStore<G, N> {
    gateway: G,
    notifier: N,
    state: watch::Sender<DirectoryState>,
    sequence: RequestSequence,
}

impl<G: UserGateway, N: Notifier> DirectoryStore<G, N> {
    /// Starts empty and loading; nothing is fetched until asked.
    pub fn new(gateway: G, notifier: N) -> Self {
        let (state, _) = watch::channel(DirectoryState::default());
        Self {
            gateway,
            notifier,
            state,
            sequence: RequestSequence::new(),
        }
    }

    /// A new read-only handle; it starts out having seen the current state.
    pub fn view(&self) -> DirectoryView {
        DirectoryView {
            receiver: self.state.subscribe(),
        }
    }

    pub fn snapshot(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    pub fn current_page(&self) -> u32 {
        self.state.borrow().current_page()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Loads page `page` (1-based; `0` is treated as `1`).
    ///
    /// If the directory turns out to have fewer pages than requested, the last
    /// existing page is loaded instead. Returns `true` when a successful
    /// result was published.
    pub async fn fetch_page(&self, page: u32) -> bool {
        let page = page.max(1);
        match self.load(page).await {
            FetchOutcome::Applied => true,
            FetchOutcome::PastEnd(last) => {
                info!("DirectoryStore: page {page} is past the end, loading page {last}");
                matches!(self.load(last).await, FetchOutcome::Applied)
            }
            FetchOutcome::Failed | FetchOutcome::Discarded => false,
        }
    }

    async fn load(&self, page: u32) -> FetchOutcome {
        let ticket = self.sequence.issue();
        info!(
            "DirectoryStore: fetching page {page} (request #{})",
            ticket.value()
        );
        self.state.send_modify(DirectoryState::begin_loading);

        let in_flight = InFlight {
            state: &self.state,
            sequence: &self.sequence,
            ticket,
            armed: true,
        };
        let result = self.gateway.list_page(page, PAGE_SIZE).await;
        in_flight.land();

        let mut outcome = FetchOutcome::Discarded;
        self.state.send_if_modified(|state| {
            if !ticket.is_newer_than(state.applied()) {
                return false;
            }
            let settled = self.sequence.is_latest(ticket);
            match result {
                Ok(response) => {
                    // Never publish a page past the end; the caller reloads
                    // the last page while loading stays up.
                    let last = total_pages_for(response.total).max(1);
                    if response.page > last {
                        outcome = FetchOutcome::PastEnd(last);
                        return false;
                    }
                    state.apply_page(response, ticket, settled, Utc::now());
                    outcome = FetchOutcome::Applied;
                }
                Err(err) => {
                    state.apply_failure(err.message().to_owned(), ticket, settled);
                    outcome = FetchOutcome::Failed;
                }
            }
            true
        });

        if matches!(outcome, FetchOutcome::Discarded) {
            warn!(
                "DirectoryStore: discarded stale response for page {page} (request #{})",
                ticket.value()
            );
        }
        outcome
    }

    async fn refresh(&self) {
        self.fetch_page(self.current_page()).await;
    }

    /// Fetches a single user without touching the directory state.
    pub async fn fetch_one(&self, id: u64) -> Option<User> {
        match self.gateway.get_one(id).await {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("DirectoryStore: user {id} unavailable: {err}");
                None
            }
        }
    }

    /// Creates a user, filling in role and status when absent.
    pub async fn create(&self, draft: UserDraft) -> bool {
        let draft = draft.with_defaults();
        match self.gateway.create(&draft).await {
            Ok(ack) => {
                info!("DirectoryStore: created user {:?}", ack.id);
                self.notifier
                    .notify(Notification::success("User created successfully"));
                self.refresh().await;
                true
            }
            Err(err) => {
                error!("DirectoryStore: create failed: {err}");
                false
            }
        }
    }

    pub async fn update(&self, id: u64, draft: &UserDraft) -> bool {
        match self.gateway.update(id, draft).await {
            Ok(_) => {
                info!("DirectoryStore: updated user {id}");
                self.notifier
                    .notify(Notification::success("User updated successfully"));
                self.refresh().await;
                true
            }
            Err(err) => {
                error!("DirectoryStore: update of user {id} failed: {err}");
                false
            }
        }
    }

    pub async fn delete(&self, id: u64) -> bool {
        match self.gateway.delete(id).await {
            Ok(()) => {
                info!("DirectoryStore: deleted user {id}");
                self.notifier
                    .notify(Notification::success("User deleted successfully"));
                self.refresh().await;
                true
            }
            Err(err) => {
                error!("DirectoryStore: delete of user {id} failed: {err}");
                false
            }
        }
    }
}
