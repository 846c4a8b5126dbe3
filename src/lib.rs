//! restcountries - client for the REST Countries web service
//!
//! This library builds resource URLs for the country lookups the service
//! offers (by name, code, region, currency and so on), performs the GET and
//! maps the JSON body onto typed [`Country`] records. The binary wraps it in
//! a small capital-city prompt.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod models;
pub mod services;
pub mod utils;

pub use models::country::Country;
pub use models::endpoint::{ApiVersion, Endpoint};
pub use services::countries::{ApiError, CountryClient, QueryResult, Resource};
