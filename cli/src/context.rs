//! One invocation's directory store, bound to whichever gateway was chosen.

use roster_business::{ChannelNotifier, DirectoryStore, Notification, UserGateway};

use crate::output::Output;

pub struct Session<G> {
    pub store: DirectoryStore<G, ChannelNotifier>,
    pub out: Output,
    toasts: flume::Receiver<Notification>,
}

impl<G: UserGateway> Session<G> {
    /// `gateway` must announce on the same channel as `notifier`.
    pub fn new(
        gateway: G,
        notifier: ChannelNotifier,
        toasts: flume::Receiver<Notification>,
    ) -> Self {
        Self {
            store: DirectoryStore::new(gateway, notifier),
            out: Output::new(),
            toasts,
        }
    }

    /// Prints the notifications raised since the last flush.
    pub fn flush_toasts(&self) {
        self.out.drain_toasts(&self.toasts);
    }
}
