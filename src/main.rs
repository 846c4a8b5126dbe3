use clap::Parser;
use restcountries::{
    cli::Args,
    config::Config,
    interactive::{capital_by_code, capital_by_name, is_valid_code, Prompt},
    CountryClient,
};
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => args.apply(config),
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = CountryClient::new(config.endpoint());
    debug!(
        "Using {} endpoint at {}",
        config.api_version,
        client.endpoint().base_url
    );

    if args.is_interactive_mode() {
        let mut prompt = Prompt::new(client, io::stdin().lock(), io::stdout());
        if let Err(e) = prompt.run().await {
            eprintln!("Prompt failed: {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = run_lookup(&client, &args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run_lookup(client: &CountryClient, args: &Args) -> anyhow::Result<()> {
    if let Some(name) = &args.name {
        if args.json {
            let countries = client.by_name(name.trim(), None).await?;
            println!("{}", serde_json::to_string_pretty(&countries)?);
        } else {
            println!("{}", capital_by_name(client, name).await);
        }
    } else if let Some(code) = &args.code {
        if !is_valid_code(code) {
            anyhow::bail!("Country code should be 2 or 3 characters");
        }
        if args.json {
            let country = client.by_alpha_code(code.trim(), None).await?;
            println!("{}", serde_json::to_string_pretty(&country)?);
        } else {
            println!("{}", capital_by_code(client, code).await);
        }
    }
    Ok(())
}
