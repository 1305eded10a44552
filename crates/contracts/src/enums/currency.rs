use serde::{Deserialize, Serialize};

/// Reporting currencies. Raw amounts are always generated in AED.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    AED,
    USD,
    INR,
    SAR,
    QAR,
    OMR,
    BHD,
}

impl Currency {
    /// Base currency of generated sales/cost/profit
    pub const BASE: Currency = Currency::AED;

    /// ISO code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::AED => "AED",
            Currency::USD => "USD",
            Currency::INR => "INR",
            Currency::SAR => "SAR",
            Currency::QAR => "QAR",
            Currency::OMR => "OMR",
            Currency::BHD => "BHD",
        }
    }

    /// Multiplier from AED into this currency
    pub fn aed_to_curr(&self) -> f64 {
        match self {
            Currency::AED => 1.0,
            Currency::USD => 0.2723,
            Currency::INR => 22.53,
            Currency::SAR => 1.02,
            Currency::QAR => 0.99,
            Currency::OMR => 0.105,
            Currency::BHD => 0.102,
        }
    }

    /// All currencies in catalogue order (AED first)
    pub fn all() -> Vec<Currency> {
        vec![
            Currency::AED,
            Currency::USD,
            Currency::INR,
            Currency::SAR,
            Currency::QAR,
            Currency::OMR,
            Currency::BHD,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the static FX table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub currency: Currency,
    pub aed_to_curr: f64,
}

/// Read-only FX table: currency -> multiplier against AED
pub fn fx_table() -> Vec<CurrencyRate> {
    Currency::all()
        .into_iter()
        .map(|currency| CurrencyRate {
            currency,
            aed_to_curr: currency.aed_to_curr(),
        })
        .collect()
}
