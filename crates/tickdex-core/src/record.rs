use serde::{Deserialize, Deserializer, Serialize};

/// One listed security from a screener export.
///
/// Field names follow the CSV column headers (`Symbol`, `Name`, `Market Cap`).
/// A market cap that is absent, empty, or non-numeric deserializes to `None`
/// and participates in sorts as a non-comparable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityRecord {
    #[serde(rename = "Symbol")]
    pub symbol: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(
        rename = "Market Cap",
        default,
        deserialize_with = "lenient_market_cap"
    )]
    pub market_cap: Option<f64>,
}

impl SecurityRecord {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, market_cap: Option<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            market_cap,
        }
    }
}

/// Accepts numeric strings, bare numbers, or garbage; garbage becomes `None`.
fn lenient_market_cap<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse::<f64>().ok()))
}
