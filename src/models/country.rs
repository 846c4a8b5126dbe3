use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("Type mismatch: expected a country object, got {0}")]
    NotAnObject(&'static str),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// v1 lists bare currency codes, v2 lists objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Currency {
    Code(String),
    Detailed {
        code: Option<String>,
        name: Option<String>,
        symbol: Option<String>,
    },
}

impl Currency {
    pub fn code(&self) -> Option<&str> {
        match self {
            Currency::Code(code) => Some(code),
            Currency::Detailed { code, .. } => code.as_deref(),
        }
    }
}

/// v1 lists bare ISO 639-1 codes, v2 lists objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Language {
    Code(String),
    Detailed {
        iso639_1: Option<String>,
        iso639_2: Option<String>,
        name: Option<String>,
        #[serde(rename = "nativeName")]
        native_name: Option<String>,
    },
}

impl Language {
    pub fn code(&self) -> Option<&str> {
        match self {
            Language::Code(code) => Some(code),
            Language::Detailed {
                iso639_1, iso639_2, ..
            } => iso639_1.as_deref().or(iso639_2.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalBloc {
    pub acronym: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub other_acronyms: Vec<String>,
    #[serde(default)]
    pub other_names: Vec<String>,
}

/// One country as returned by the service.
///
/// Every field is optional: filtered queries (`fields=`) only return the
/// requested keys, and the two API versions disagree on a few of them.
/// A value of the wrong JSON type reads as absent instead of failing the
/// whole response. Identity is the ISO 3166-1 numeric code; equality,
/// ordering and hashing look at nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub top_level_domain: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alpha2_code: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alpha3_code: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<Currency>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub calling_codes: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub alt_spellings: Option<Vec<String>>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub relevance: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub translations: Option<BTreeMap<String, Option<String>>>,
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub latlng: Option<Vec<f64>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub demonym: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub gini: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub timezones: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub native_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub numeric_code: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub regional_blocs: Option<Vec<RegionalBloc>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cioc: Option<String>,
}

impl Country {
    /// Builds a record from one element of a response body.
    pub fn from_value(value: Value) -> Result<Self, CountryError> {
        if !value.is_object() {
            return Err(CountryError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn capital(&self) -> &str {
        self.capital.as_deref().unwrap_or_default()
    }

    /// True when `code` (case-insensitive) is this country's alpha-2 or alpha-3 code.
    pub fn has_alpha_code(&self, code: &str) -> bool {
        [&self.alpha2_code, &self.alpha3_code]
            .into_iter()
            .flatten()
            .any(|c| c.eq_ignore_ascii_case(code))
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.numeric_code == other.numeric_code
    }
}

impl Eq for Country {}

impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Country {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numeric_code.cmp(&other.numeric_code)
    }
}

impl Hash for Country {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numeric_code.hash(state);
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// v1 sends relevance as "0", later builds as a number; numeric codes vary the same way.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

fn whole_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
            .map(|f| f as u64)
    }))
}
