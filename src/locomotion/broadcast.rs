//! Ordered, synchronous fan-out of ground transitions.
//!
//! Subscribers run in registration order, inside the same physics step and
//! before any motor computes its force. None of them calls back into the
//! ground sensor, so there is no re-entrancy to guard against.

use glam::Vec2;

use super::state::{ControllerState, PhysicState};
use super::Motors;

/// Everything a subscriber may read or mutate while handling one transition.
pub struct Transition<'a> {
    pub to: PhysicState,
    pub motors: &'a Motors,
    pub state: &'a mut ControllerState,
    pub velocity: &'a mut Vec2,
}

pub type TransitionHandler = fn(&mut Transition<'_>);

struct Subscriber {
    name: &'static str,
    handler: TransitionHandler,
}

#[derive(Default)]
pub struct StateBroadcaster {
    subscribers: Vec<Subscriber>,
}

impl StateBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, name: &'static str, handler: TransitionHandler) {
        self.subscribers.push(Subscriber { name, handler });
    }

    pub fn emit(&self, transition: &mut Transition<'_>) {
        for subscriber in &self.subscribers {
            log::trace!("{:?} -> {}", transition.to, subscriber.name);
            (subscriber.handler)(transition);
        }
    }

    /// Subscriber names in invocation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subscribers.iter().map(|s| s.name)
    }
}
