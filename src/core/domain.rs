use serde::{Deserialize, Serialize};
use crate::core::locale::Locale;
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by lendable and lending objects
pub trait Identifiable {
    fn id(&self) -> i64;
}


// Configuration abstracts config options for the lending desk
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub locale: Locale,
    pub publisher: GatewayPublisherVia,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            locale: Locale::Es,
            publisher: GatewayPublisherVia::Logs,
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
