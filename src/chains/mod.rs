use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// Chain identifier as the API sends it, either a short code or a numeric id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainId {
    Text(String),
    Numeric(i64),
}

impl ChainId {
    fn from_value(value: &Value) -> Option<ChainId> {
        match value {
            Value::String(s) => Some(ChainId::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(n) => Some(ChainId::Numeric(n)),
                None => Some(ChainId::Text(n.to_string())),
            },
            _ => None,
        }
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Text(s) => f.write_str(s),
            ChainId::Numeric(n) => write!(f, "{}", n),
        }
    }
}

// Unified chain structure for all of the response shapes DeBank serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    pub id: ChainId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl ChainRecord {
    /// Display name for log output, falling back to the chain id
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

/// Normalize a chain-list response into an ordered list of records.
///
/// The API serves one of several shapes depending on the endpoint:
/// a `data.chains` nested list, a flat list under `data`, an object
/// keyed by chain id, or a bare top-level list. Source order is kept.
pub fn normalize_chain_list(data: &Value) -> Vec<ChainRecord> {
    match data {
        Value::Object(map) => {
            if let Some(chains) = map
                .get("data")
                .and_then(|d| d.get("chains"))
                .and_then(Value::as_array)
            {
                records_from_list(chains)
            } else if let Some(data_field) = map.get("data") {
                match data_field.as_array() {
                    Some(chains) => records_from_list(chains),
                    None => Vec::new(),
                }
            } else {
                // Keys are chain ids; values are chain objects or bare
                // display-name strings
                map.iter()
                    .filter_map(|(key, value)| record_from_keyed_entry(key, value))
                    .collect()
            }
        }
        Value::Array(chains) => records_from_list(chains),
        _ => Vec::new(),
    }
}

fn records_from_list(chains: &[Value]) -> Vec<ChainRecord> {
    chains.iter().filter_map(record_from_object).collect()
}

fn record_from_object(chain: &Value) -> Option<ChainRecord> {
    let fields = chain.as_object()?;
    let id = ChainId::from_value(fields.get("id")?)?;

    Some(ChainRecord {
        id,
        name: fields.get("name").and_then(Value::as_str).map(str::to_string),
        logo_url: fields
            .get("logo_url")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn record_from_keyed_entry(key: &str, value: &Value) -> Option<ChainRecord> {
    match value {
        Value::Object(fields) => Some(ChainRecord {
            id: ChainId::Text(key.to_string()),
            name: fields.get("name").and_then(Value::as_str).map(str::to_string),
            logo_url: fields
                .get("logo_url")
                .and_then(Value::as_str)
                .map(str::to_string),
        }),
        Value::String(name) => Some(ChainRecord {
            id: ChainId::Text(key.to_string()),
            name: Some(name.clone()),
            logo_url: None,
        }),
        _ => None,
    }
}

pub mod debank;
