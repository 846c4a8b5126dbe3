use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

pub const V1_BASE_URL: &str = "https://restcountries.eu/rest/v1";
pub const V2_BASE_URL: &str = "https://restcountries.eu/rest/v2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

impl FromStr for ApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(ApiVersion::V1),
            "v2" | "2" => Ok(ApiVersion::V2),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1"),
            ApiVersion::V2 => write!(f, "v2"),
        }
    }
}

/// Where requests go and how multi-value terms are joined.
///
/// The two published API versions differ only in their base path and in the
/// character used to join batched codes and `fields=` lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub base_url: String,
    pub separator: char,
}

impl Endpoint {
    pub fn v1() -> Self {
        Self {
            base_url: V1_BASE_URL.to_string(),
            separator: ',',
        }
    }

    pub fn v2() -> Self {
        Self {
            base_url: V2_BASE_URL.to_string(),
            separator: ';',
        }
    }

    pub fn for_version(version: ApiVersion) -> Self {
        match version {
            ApiVersion::V1 => Self::v1(),
            ApiVersion::V2 => Self::v2(),
        }
    }

    /// Keeps the separator and swaps the base, e.g. to point at a mirror.
    pub fn with_base_url(self, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            separator: self.separator,
        }
    }

    pub fn join<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut joined = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                joined.push(self.separator);
            }
            joined.push_str(value.as_ref());
        }
        joined
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::v2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_differ_in_base_and_separator() {
        let v1 = Endpoint::v1();
        let v2 = Endpoint::v2();

        assert_eq!(v1.base_url, "https://restcountries.eu/rest/v1");
        assert_eq!(v1.separator, ',');
        assert_eq!(v2.base_url, "https://restcountries.eu/rest/v2");
        assert_eq!(v2.separator, ';');
        assert_eq!(Endpoint::for_version(ApiVersion::V1), v1);
        assert_eq!(Endpoint::default(), v2);
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let endpoint = Endpoint::v1().with_base_url("http://127.0.0.1:4000/v1/");
        assert_eq!(endpoint.base_url, "http://127.0.0.1:4000/v1");
        assert_eq!(endpoint.separator, ',');
    }

    #[test]
    fn join_uses_separator() {
        assert_eq!(Endpoint::v2().join(&["ng", "eg", "ken"]), "ng;eg;ken");
        assert_eq!(Endpoint::v1().join(&["ng", "eg", "ken"]), "ng,eg,ken");
        assert_eq!(Endpoint::v2().join::<&str>(&[]), "");
    }

    #[test]
    fn parses_version_strings() {
        assert_eq!("v1".parse::<ApiVersion>(), Ok(ApiVersion::V1));
        assert_eq!(" V2 ".parse::<ApiVersion>(), Ok(ApiVersion::V2));
        assert_eq!("v3".parse::<ApiVersion>(), Err("v3".to_string()));
        assert_eq!(ApiVersion::V1.to_string(), "v1");
    }
}
