//! Action-responder chain.
//!
//! Links are owned by the chain in leaf-to-root order; forwarding is
//! positional, so there is no back-pointer to cycle with its owner.

use crate::routing::action::Action;

/// Result of offering an action to one link.
#[derive(Debug)]
pub enum Outcome {
    /// The link fully processed the action; propagation stops.
    Consumed,
    /// The link does not recognize the action; it travels on unchanged.
    Forwarded(Action),
}

/// One link in the chain.
pub trait ActionResponder {
    fn handle_action(&mut self, action: Action) -> Outcome;
}

/// Ordered sequence of links, walked front to back on dispatch.
#[derive(Default)]
pub struct ResponderChain {
    links: Vec<Box<dyn ActionResponder>>,
}

impl ResponderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link; later links sit closer to the root of the app.
    pub fn link(mut self, responder: Box<dyn ActionResponder>) -> Self {
        self.links.push(responder);
        self
    }

    /// Offers `action` to each link in order until one consumes it.
    ///
    /// An action no link recognizes is dropped silently at the end of the
    /// chain. Returns whether the action was consumed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut current = action;

        for responder in &mut self.links {
            match responder.handle_action(current) {
                Outcome::Consumed => return true,
                Outcome::Forwarded(action) => current = action,
            }
        }

        tracing::debug!(action = ?current, "action reached end of responder chain");
        false
    }
}
