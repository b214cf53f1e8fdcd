use serde::{Deserialize, Serialize};

/// Identity of an exchange.
///
/// Every snapshot derived from an exchange carries the same id, so the id
/// names the routed unit of work rather than a particular copy of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExchangeId(pub uuid::Uuid);

impl ExchangeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ExchangeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exc:{}", self.0)
    }
}
