//! Subscribe/unsubscribe registry for host events (viewport resize, fragment
//! change).
//!
//! A [`Listener`] is the subscription: events emitted on its [`EventSource`]
//! are queued in a channel until the owner drains them, and dropping the
//! listener removes it from the source.

use crossbeam::channel;
use std::sync::{Arc, Mutex, Weak};

type Senders<E> = Arc<Mutex<Vec<(u64, channel::Sender<E>)>>>;

#[derive(Debug)]
pub struct EventSource<E> {
    senders: Senders<E>,
    next_id: u64,
}

impl<E: Clone> EventSource<E> {
    pub fn new() -> Self {
        Self {
            senders: Arc::new(Mutex::new(Vec::new())),
            next_id: 0,
        }
    }

    pub fn subscribe(&mut self) -> Listener<E> {
        let (sender, receiver) = channel::unbounded();
        let id = self.next_id;
        self.next_id += 1;
        self.senders.lock().expect("poisoned").push((id, sender));
        tracing::debug!("listener {} subscribed", id);
        Listener {
            id,
            receiver,
            source: Arc::downgrade(&self.senders),
        }
    }

    /// Delivers `event` to every live listener.
    pub fn emit(&self, event: E) {
        let senders = self.senders.lock().expect("poisoned");
        for (id, sender) in senders.iter() {
            if sender.send(event.clone()).is_err() {
                tracing::debug!("listener {} is gone", id);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.senders.lock().expect("poisoned").len()
    }
}

impl<E: Clone> Default for EventSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Listener<E> {
    id: u64,
    receiver: channel::Receiver<E>,
    source: Weak<Mutex<Vec<(u64, channel::Sender<E>)>>>,
}

impl<E> Listener<E> {
    /// Takes every pending event, oldest first.
    pub fn drain(&self) -> Vec<E> {
        self.receiver.try_iter().collect()
    }

    /// Takes every pending event and keeps only the most recent one.
    pub fn latest(&self) -> Option<E> {
        self.receiver.try_iter().last()
    }
}

impl<E> Drop for Listener<E> {
    fn drop(&mut self) {
        if let Some(senders) = self.source.upgrade() {
            if let Ok(mut senders) = senders.lock() {
                senders.retain(|(id, _)| *id != self.id);
            }
        }
        tracing::debug!("listener {} unsubscribed", self.id);
    }
}
