use crate::gateway::events::EventPublisher;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::logs::publisher::LogPublisher;
use crate::gateway::memory::publisher::MemoryPublisher;

pub fn create_publisher(via: GatewayPublisherVia) -> Box<dyn EventPublisher> {
    match via {
        GatewayPublisherVia::Logs => {
            Box::new(LogPublisher::new())
        }
        GatewayPublisherVia::Memory => {
            Box::new(MemoryPublisher::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::factory::create_publisher;

    #[test]
    fn test_should_create_publishers() {
        let event = DomainEvent::lent("item_lent", "checkout", "1", &HashMap::new(), &1).expect("build event");
        for via in [GatewayPublisherVia::Logs, GatewayPublisherVia::Memory] {
            let publisher = create_publisher(via);
            assert!(publisher.publish(&event).is_ok());
        }
    }
}
