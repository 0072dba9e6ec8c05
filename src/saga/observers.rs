use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::action::Action;

/// Fan-out of published actions to every live subscriber.
///
/// Each subscriber gets its own unbounded queue, so a slow reader never
/// loses actions. Subscribers whose receiver was dropped are pruned on the
/// next publish.
#[derive(Default)]
pub struct ObserverSet {
    senders: Mutex<Vec<UnboundedSender<Action>>>,
}

impl ObserverSet {
    pub fn subscribe(&self) -> UnboundedReceiver<Action> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.lock().push(tx);
        rx
    }

    /// Deliver `action` to every subscriber; returns how many received it.
    pub fn publish(&self, action: &Action) -> usize {
        let mut senders = self.senders.lock();
        senders.retain(|tx| tx.send(action.clone()).is_ok());
        senders.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Outcome;

    #[test]
    fn every_subscriber_receives_in_order() {
        let observers = ObserverSet::default();
        let mut a = observers.subscribe();
        let mut b = observers.subscribe();

        observers.publish(&Outcome::SignOutSucceeded.into());
        observers.publish(
            &Outcome::PostMessageFailed {
                message: "boom".into(),
            }
            .into(),
        );

        for rx in [&mut a, &mut b] {
            assert_eq!(rx.try_recv().unwrap(), Outcome::SignOutSucceeded.into());
            assert!(rx.try_recv().unwrap().as_outcome().unwrap().is_failure());
        }
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let observers = ObserverSet::default();
        let rx = observers.subscribe();
        let _kept = observers.subscribe();
        drop(rx);

        assert_eq!(observers.publish(&Outcome::SignOutSucceeded.into()), 1);
    }
}
