use std::cell::RefCell;
use std::rc::Rc;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in process; clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemoryPublisher {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.borrow_mut().push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_publish_to_memory() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let lent = DomainEvent::lent("item_lent", "checkout", "1", &HashMap::new(), &1).expect("build event");
        let rejected = DomainEvent::rejected("item_rejected", "checkout", "1", &HashMap::new(), &1).expect("build event");
        publisher.publish(&lent).expect("should publish");
        publisher.publish(&rejected).expect("should publish");
        let events = observer.events();
        assert_eq!(2, events.len());
        assert_eq!(DomainEventType::Lent, events[0].kind);
        assert_eq!(DomainEventType::Rejected, events[1].kind);
    }
}
