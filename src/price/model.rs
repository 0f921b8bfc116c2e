use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::time::serialize_iso_millis;

/// Which provider answered. `None` pairs with the zero-price sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceSource {
    GeckoTerminal,
    CoinGecko,
    None,
}

impl PriceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceSource::GeckoTerminal => "geckoterminal",
            PriceSource::CoinGecko => "coingecko",
            PriceSource::None => "none",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A USD price tagged with its provenance.
///
/// Only built through [`PricePoint::quoted`] or [`PricePoint::unavailable`], so
/// `source == None` exactly when `usd == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub usd: f64,
    pub source: PriceSource,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl PricePoint {
    /// A provider answer, or `None` when the price is not usable or the source
    /// is not a real provider.
    pub fn quoted(source: PriceSource, usd: f64) -> Option<Self> {
        if source == PriceSource::None || !is_usable_price(usd) {
            return None;
        }

        Some(Self {
            usd,
            source,
            updated_at: Utc::now(),
        })
    }

    pub fn unavailable() -> Self {
        Self {
            usd: 0.0,
            source: PriceSource::None,
            updated_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.source != PriceSource::None
    }
}

pub fn is_usable_price(usd: f64) -> bool {
    usd.is_finite() && usd > 0.0
}
