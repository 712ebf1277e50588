use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;
pub mod output;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
    // keeps events in process only; used by tests and by embedders that want a quiet desk
    Memory,
}
