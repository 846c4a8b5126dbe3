use crate::models::country::{Country, CountryError};
use crate::models::endpoint::Endpoint;
use crate::utils::url::build_url;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No resource found at {url}")]
    NotFound { url: String },
    #[error("Request to {url} failed with status {status}")]
    RequestFailed { status: StatusCode, url: String },
    #[error("Expected {expected}, got {count} countries")]
    UnexpectedShape { expected: &'static str, count: usize },
    #[error("Reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Country error: {0}")]
    CountryError(#[from] CountryError),
}

impl ApiError {
    /// HTTP status behind the failure, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            ApiError::RequestFailed { status, .. } => Some(*status),
            ApiError::ReqwestError(e) => e.status(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    All,
    Name,
    Language,
    CallingCode,
    Alpha,
    AlphaCodes,
    Currency,
    Region,
    Subregion,
    Capital,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::All => "/all",
            Resource::Name => "/name",
            Resource::Language => "/lang",
            Resource::CallingCode => "/callingcode",
            Resource::Alpha => "/alpha",
            Resource::AlphaCodes => "/alpha?codes=",
            Resource::Currency => "/currency",
            Resource::Region => "/region",
            Resource::Subregion => "/subregion",
            Resource::Capital => "/capital",
        }
    }
}

/// A response body is either one country object or an array of them.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Single(Country),
    Many(Vec<Country>),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::Single(_) => 1,
            QueryResult::Many(countries) => countries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<Country> {
        match self {
            QueryResult::Single(country) => vec![country],
            QueryResult::Many(countries) => countries,
        }
    }

    pub fn into_single(self) -> Result<Country, ApiError> {
        match self {
            QueryResult::Single(country) => Ok(country),
            QueryResult::Many(mut countries) if countries.len() == 1 => Ok(countries.remove(0)),
            QueryResult::Many(countries) => Err(ApiError::UnexpectedShape {
                expected: "a single country",
                count: countries.len(),
            }),
        }
    }
}

/// Turns a 200 body into records, keeping array order.
pub fn parse_body(body: &str) -> Result<QueryResult, ApiError> {
    match serde_json::from_str::<Value>(body)? {
        Value::Array(items) => {
            let countries = items
                .into_iter()
                .map(Country::from_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(QueryResult::Many(countries))
        }
        other => Ok(QueryResult::Single(Country::from_value(other)?)),
    }
}

/// Client for the REST Countries resources.
///
/// Holds nothing but the endpoint and a reqwest connection pool, so clones
/// can be handed to independent tasks. Each call is exactly one GET.
#[derive(Debug, Clone)]
pub struct CountryClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

impl CountryClient {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_http_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_http_client(http: reqwest::Client, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn fetch(
        &self,
        resource: Resource,
        term: &str,
        filters: Option<&[&str]>,
    ) -> Result<QueryResult, ApiError> {
        let url = build_url(&self.endpoint, resource.path(), term, filters);
        debug!("GET {}", url);

        let response = self.http.get(url.as_str()).send().await?;
        let status = response.status();

        if status == StatusCode::OK {
            let body = response.text().await?;
            let result = parse_body(&body)?;
            debug!("Received {} countries from {}", result.len(), url);
            Ok(result)
        } else if status == StatusCode::NOT_FOUND {
            warn!("Nothing found at {}", url);
            Err(ApiError::NotFound { url })
        } else {
            warn!("Request to {} failed with status {}", url, status);
            Err(ApiError::RequestFailed { status, url })
        }
    }

    pub async fn all(&self, filters: Option<&[&str]>) -> Result<Vec<Country>, ApiError> {
        Ok(self.fetch(Resource::All, "", filters).await?.into_vec())
    }

    /// Name matching (partial or full) happens server-side.
    pub async fn by_name(
        &self,
        name: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self.fetch(Resource::Name, name, filters).await?.into_vec())
    }

    pub async fn by_language(
        &self,
        language: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::Language, language, filters)
            .await?
            .into_vec())
    }

    pub async fn by_calling_code(
        &self,
        calling_code: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::CallingCode, calling_code, filters)
            .await?
            .into_vec())
    }

    /// ISO 3166-1 alpha-2 or alpha-3 code, e.g. `de` or `deu`.
    pub async fn by_alpha_code(
        &self,
        code: &str,
        filters: Option<&[&str]>,
    ) -> Result<Country, ApiError> {
        self.fetch(Resource::Alpha, code, filters)
            .await?
            .into_single()
    }

    pub async fn by_alpha_codes(
        &self,
        codes: &[&str],
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        let codes = self.endpoint.join(codes);
        Ok(self
            .fetch(Resource::AlphaCodes, &codes, filters)
            .await?
            .into_vec())
    }

    pub async fn by_currency(
        &self,
        currency: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::Currency, currency, filters)
            .await?
            .into_vec())
    }

    pub async fn by_region(
        &self,
        region: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::Region, region, filters)
            .await?
            .into_vec())
    }

    pub async fn by_subregion(
        &self,
        subregion: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::Subregion, subregion, filters)
            .await?
            .into_vec())
    }

    pub async fn by_capital(
        &self,
        capital: &str,
        filters: Option<&[&str]>,
    ) -> Result<Vec<Country>, ApiError> {
        Ok(self
            .fetch(Resource::Capital, capital, filters)
            .await?
            .into_vec())
    }
}
