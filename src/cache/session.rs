use log::debug;

use super::key::ResourceKey;

/// Handed out when a load starts; only the latest one may be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub key: ResourceKey,
    generation: u64,
}

/// Tracks which load the view is currently waiting for.
///
/// Every navigation bumps the generation, so a response that arrives for an
/// older ticket is ignored instead of replacing the newer view.
#[derive(Debug, Default)]
pub struct ViewSession {
    current: Option<Ticket>,
    generation: u64,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, key: ResourceKey) -> Ticket {
        self.generation += 1;
        let ticket = Ticket {
            key,
            generation: self.generation,
        };
        if let Some(previous) = self.current.replace(ticket) {
            debug!("Load of {} superseded by {}", previous.key, key);
        }
        ticket
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    pub fn current_key(&self) -> Option<ResourceKey> {
        self.current.map(|ticket| ticket.key)
    }
}
