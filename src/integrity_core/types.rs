//! Input records: insider trades, filing predictions, persons

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(rename = "A")]
    Acquired,
    #[serde(rename = "D")]
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeKind {
    #[serde(rename = "non-derivative")]
    NonDerivative,
    #[serde(rename = "derivative")]
    Derivative,
}

/// One disclosed transaction by one insider.
///
/// `date` is kept exactly as supplied upstream. It is parsed when the trade is
/// correlated against a filing, so a malformed value only drops the affected pairs.
/// A null or missing date becomes an empty string and is counted the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub security: String,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub date: String,
    pub transaction_code: String,
    #[serde(default, deserialize_with = "de_share_count")]
    pub shares: u64,
    #[serde(default)]
    pub price_per_share: Option<f64>,
    #[serde(rename = "acquired_disposed")]
    pub direction: TradeDirection,
    #[serde(default, deserialize_with = "de_share_count")]
    pub shares_owned_after: u64,
    #[serde(rename = "transaction_type")]
    pub kind: TradeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "de_share_count_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub underlying_shares: Option<u64>,
}

impl Trade {
    pub fn is_acquisition(&self) -> bool {
        matches!(self.direction, TradeDirection::Acquired)
    }

    pub fn is_disposal(&self) -> bool {
        matches!(self.direction, TradeDirection::Disposed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "STOCK_UP")]
    StockUp,
    #[serde(rename = "STOCK_DOWN")]
    StockDown,
    #[serde(rename = "NEUTRAL")]
    Neutral,
    #[serde(other)]
    Unrecognized,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::StockUp => "STOCK_UP",
            Impact::StockDown => "STOCK_DOWN",
            Impact::Neutral => "NEUTRAL",
            Impact::Unrecognized => "UNRECOGNIZED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    #[serde(alias = "Medium")]
    Moderate,
    Low,
    /// Any label the classifier emitted that we don't know. Penalised as `Low`.
    #[serde(other)]
    Unrecognized,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Moderate => "Moderate",
            Confidence::Low => "Low",
            Confidence::Unrecognized => "Unrecognized",
        }
    }
}

/// One classified disclosure for the company under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingPrediction {
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub filing_date: String,
    pub url: String,
    pub impact: Impact,
    pub confidence: Confidence,
    #[serde(default, deserialize_with = "de_nullable_string")]
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub cik: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub trades: Vec<Trade>,
}

/// A single scoring request: every insider of one company plus the filing evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyBatch {
    pub company: String,
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub filings: Vec<FilingPrediction>,
}

// Share counts never feed scoring, so an odd value must not reject the whole batch.
// Integral floats, numeric strings ("1,500") and nulls are accepted; anything else is 0.
fn de_share_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_share_count_opt(deserializer)?.unwrap_or(0))
}

fn de_share_count_opt<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    let count = match v {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(share_count_from_f64)),
        Value::String(s) => s
            .replace(',', "")
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(share_count_from_f64),
        _ => None,
    };
    Ok(count)
}

fn share_count_from_f64(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 {
        Some(value.round() as u64)
    } else {
        None
    }
}

fn de_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Display name for a Form 4 transaction code, falling back to the raw code.
pub fn transaction_code_label(code: &str) -> &str {
    match code {
        "P" => "Purchase",
        "S" => "Sale",
        "A" => "Grant/Award",
        "D" => "Disposition",
        "M" => "Exercise",
        "F" => "Tax Withholding",
        "G" => "Gift",
        "V" => "Voluntary Report",
        other => other,
    }
}
