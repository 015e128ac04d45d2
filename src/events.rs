//! Topic-addressed publish/subscribe channel for non-adjacent components.
//!
//! The review form and the product display are not in a direct parent/child
//! relationship, so a submitted review travels over an [`EventChannel`]
//! instead of through properties. The channel is an ordinary value owned by
//! the application root and lent to the components that publish or
//! subscribe; there is no ambient global instance.
//!
//! Delivery is synchronous: [`EventChannel::publish`] runs every handler
//! registered for the topic, in registration order, before it returns.

use std::fmt;

/// Topic on which completed reviews are announced.
pub const REVIEW_SUBMITTED: &str = "review-submitted";

/// Opaque handle identifying one registration on an [`EventChannel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler<T> = Box<dyn FnMut(&T) + Send>;

struct Subscription<T> {
    id: SubscriptionId,
    topic: String,
    handler: Handler<T>,
}

/// Synchronous publish/subscribe hub carrying payloads of type `T`.
pub struct EventChannel<T> {
    subscriptions: Vec<Subscription<T>>,
    next_id: u64,
}

impl<T> Default for EventChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventChannel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topics: Vec<&str> = self
            .subscriptions
            .iter()
            .map(|subscription| subscription.topic.as_str())
            .collect();
        f.debug_struct("EventChannel")
            .field("topics", &topics)
            .finish_non_exhaustive()
    }
}

impl<T> EventChannel<T> {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Registers `handler` for `topic`.
    ///
    /// The handler stays registered until [`Self::unsubscribe`] is called
    /// with the returned identifier.
    pub fn subscribe<F>(&mut self, topic: &str, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.subscriptions.push(Subscription {
            id,
            topic: topic.to_owned(),
            handler: Box::new(handler),
        });
        tracing::trace!(topic, subscription = id.0, "subscribed");
        id
    }

    /// Removes a registration.
    ///
    /// Returns `false` when `id` was not registered on this channel.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions
            .retain(|subscription| subscription.id != id);
        before != self.subscriptions.len()
    }

    /// Delivers `payload` to every handler registered for `topic`.
    ///
    /// Returns the number of handlers invoked. Publishing to a topic nobody
    /// listens on is not an error.
    pub fn publish(&mut self, topic: &str, payload: &T) -> usize {
        let mut delivered = 0_usize;
        for subscription in self
            .subscriptions
            .iter_mut()
            .filter(|subscription| subscription.topic == topic)
        {
            (subscription.handler)(payload);
            delivered = delivered.saturating_add(1);
        }
        tracing::debug!(topic, delivered, "published event");
        delivered
    }

    /// Returns how many handlers are registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.topic == topic)
            .count()
    }
}
