use crate::models::endpoint::{ApiVersion, Endpoint};
use dotenvy::dotenv;
use std::env;
use thiserror::Error;

pub const API_VERSION_VAR: &str = "RESTCOUNTRIES_API_VERSION";
pub const BASE_URL_VAR: &str = "RESTCOUNTRIES_BASE_URL";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unsupported API version '{0}', expected v1 or v2")]
    InvalidApiVersion(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub api_version: ApiVersion,
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_vars(
            env::var(API_VERSION_VAR).ok().as_deref(),
            env::var(BASE_URL_VAR).ok().as_deref(),
        )
    }

    pub fn from_vars(api_version: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let api_version = match api_version.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse::<ApiVersion>().map_err(ConfigError::InvalidApiVersion)?,
            None => ApiVersion::default(),
        };

        Ok(Self {
            api_version,
            base_url: base_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        let endpoint = Endpoint::for_version(self.api_version);
        match &self.base_url {
            Some(base_url) => endpoint.with_base_url(base_url),
            None => endpoint,
        }
    }
}
