use crate::models::country::Country;
use crate::services::countries::{ApiError, CountryClient};
use reqwest::StatusCode;
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Name,
    Code,
}

pub fn is_valid_code(code: &str) -> bool {
    matches!(code.trim().chars().count(), 2 | 3)
}

pub fn describe_by_name(countries: &[Country]) -> String {
    if countries.is_empty() {
        return "Country name does not exist, please re-enter".to_string();
    }
    countries
        .iter()
        .map(|c| format!("Capital City of {} is {}", c.name(), c.capital()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn failure_message(error: &ApiError, lookup: Lookup) -> String {
    let message = match error.status() {
        Some(status) if status == StatusCode::BAD_REQUEST => match lookup {
            Lookup::Name => "Invalid country name, please re-enter",
            Lookup::Code => "Invalid country code, please re-enter",
        },
        Some(status) if status == StatusCode::NOT_FOUND => match lookup {
            Lookup::Name => "Country name does not exist, please re-enter",
            Lookup::Code => "Country code not found, please re-enter",
        },
        Some(status) if status.is_server_error() => "Server error, please retry later",
        _ => return format!("Request failed: {}", error),
    };
    message.to_string()
}

pub async fn capital_by_name(client: &CountryClient, name: &str) -> String {
    let name = name.trim().to_lowercase();
    match client.by_name(&name, None).await {
        Ok(countries) => describe_by_name(&countries),
        Err(e) => failure_message(&e, Lookup::Name),
    }
}

pub async fn capital_by_code(client: &CountryClient, code: &str) -> String {
    let code = code.trim().to_uppercase();
    match client.by_alpha_code(&code, None).await {
        Ok(country) if country.has_alpha_code(&code) => format!(
            "Capital city of {} ({}) is {}",
            code,
            country.name(),
            country.capital()
        ),
        Ok(country) => {
            debug!("Code {} resolved to {:?} without matching it", code, country.name);
            "Country code not found, please re-enter".to_string()
        }
        Err(e) => failure_message(&e, Lookup::Code),
    }
}

/// The numbered capital-city menu. Ends on option 3 or end of input.
pub struct Prompt<R, W> {
    client: CountryClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(client: CountryClient, input: R, output: W) -> Self {
        Self {
            client,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "select an option from the following: ")?;
            writeln!(self.output, "1. Find capital city by country name")?;
            writeln!(self.output, "2. Find capital city by country code")?;
            writeln!(self.output, "3. Exit the program")?;
            writeln!(self.output, "Enter your choice (1/2/3): ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                return Ok(());
            };

            let message = match choice.as_str() {
                "1" => {
                    writeln!(self.output, "Enter the Country name: ")?;
                    self.output.flush()?;
                    let Some(name) = self.read_line()? else {
                        return Ok(());
                    };
                    capital_by_name(&self.client, &name).await
                }
                "2" => {
                    let Some(code) = self.read_code()? else {
                        return Ok(());
                    };
                    capital_by_code(&self.client, &code).await
                }
                "3" => {
                    writeln!(self.output, "Good Bye")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice\n")?;
                    continue;
                }
            };

            writeln!(self.output, "{}\n", message)?;
        }
    }

    fn read_code(&mut self) -> anyhow::Result<Option<String>> {
        loop {
            writeln!(self.output, "Enter 2 or 3 char country code: ")?;
            self.output.flush()?;
            let Some(code) = self.read_line()? else {
                return Ok(None);
            };
            if is_valid_code(&code) {
                return Ok(Some(code));
            }
            writeln!(self.output, "Country code should be 2 or 3 characters")?;
        }
    }

    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
