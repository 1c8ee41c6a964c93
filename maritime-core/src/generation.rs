use std::cell::Cell;

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the response holding the latest
/// ticket may update state; anything older is stale.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: Cell<u64>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        let next = self.current.get() + 1;
        self.current.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::RequestGeneration;

    #[test]
    fn test_latest_ticket_wins() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        assert!(generation.is_current(first));

        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_out_of_order_completion_is_stale() {
        let generation = RequestGeneration::new();
        let slow = generation.begin();
        let fast = generation.begin();
        // fast resolves first and is applied, slow resolves afterwards
        assert!(generation.is_current(fast));
        assert!(!generation.is_current(slow));
    }
}
