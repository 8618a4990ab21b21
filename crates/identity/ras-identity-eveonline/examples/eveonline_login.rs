//! Example showing how to log in with EVE Online SSO
//!
//! Set `EVE_CLIENT_ID`, `EVE_CLIENT_SECRET` and `EVE_CALLBACK_URL` (a `.env` file
//! works too). `EVE_BASE_URI` points the example at another SSO, such as the
//! Singularity test server.

use anyhow::{Context, Result};
use ras_identity_eveonline::{EveOnline, scopes, verify_character};
use ras_identity_oauth2::{Credentials, InMemoryTokenStorage, ServiceConfig};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn config_from_env() -> Result<ServiceConfig> {
    let credentials = Credentials::new(
        std::env::var("EVE_CLIENT_ID").context("EVE_CLIENT_ID environment variable is required")?,
        std::env::var("EVE_CLIENT_SECRET")
            .context("EVE_CLIENT_SECRET environment variable is required")?,
        std::env::var("EVE_CALLBACK_URL")
            .unwrap_or_else(|_| "http://localhost:3000/callback".to_string()),
    );

    let mut config = ServiceConfig::new(credentials)
        .with_scopes([scopes::PUBLIC_DATA, scopes::CHARACTER_SKILLS_READ]);
    if let Ok(base_uri) = std::env::var("EVE_BASE_URI") {
        config = config.with_base_api_uri(base_uri);
    }
    Ok(config)
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let storage = Arc::new(InMemoryTokenStorage::new());
    let service = EveOnline::service(config_from_env()?, storage)?;

    println!("EVE Online SSO Example");
    println!("======================");

    let (url, state) = service.authorization_uri(HashMap::new()).await?;
    println!("\n1. Open this URL and authorize the application:\n   {}", url);

    println!("\n2. Paste the `code` query parameter from the callback URL");
    let code = prompt("code")?;

    let token = service.request_access_token(&code, Some(&state)).await?;
    info!(
        "Received access token, refresh token present: {}",
        token.refresh_token.is_some()
    );

    let character = verify_character(&service).await?;
    println!(
        "\n3. Logged in as {} (character id {})",
        character.character_name, character.character_id
    );
    for scope in character.granted_scopes() {
        println!("   granted: {}", scope);
    }

    Ok(())
}
