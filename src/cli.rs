use crate::config::Config;
use crate::models::endpoint::ApiVersion;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "restcountries",
    about = "Look up countries and their capital cities on restcountries.eu",
    version
)]
pub struct Args {
    /// API version to query; overrides RESTCOUNTRIES_API_VERSION
    #[arg(long, value_enum)]
    pub api_version: Option<ApiVersion>,

    /// Base URL of the service; overrides RESTCOUNTRIES_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Look up a country by name and exit
    #[arg(short, long, conflicts_with = "code")]
    pub name: Option<String>,

    /// Look up a country by its 2 or 3 letter code and exit
    #[arg(short, long)]
    pub code: Option<String>,

    /// Print matching countries as JSON instead of a capital-city line
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(version) = self.api_version {
            config.api_version = version;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        config
    }

    pub fn is_interactive_mode(&self) -> bool {
        self.name.is_none() && self.code.is_none()
    }
}
