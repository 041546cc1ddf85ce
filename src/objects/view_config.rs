use super::CurrencyRates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub tickets_url: String,
    pub logo_prefix: String,
    pub rates: CurrencyRates,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            tickets_url: "/tickets.json".into(),
            logo_prefix: "/logos".into(),
            rates: CurrencyRates::default(),
        }
    }
}
