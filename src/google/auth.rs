//! OAuth authentication flow with a local callback server.

use anyhow::{Context, Result};
use google_calendar::Client;
use google_calendar::types::MinAccessRole;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;

use crate::app_config::AppConfig;
use crate::session::{Session, SessionData};

pub const REDIRECT_PORT: u16 = 8085;
const SCOPES: &[&str] = &["https://www.googleapis.com/auth/calendar"];

pub fn redirect_uri() -> String {
    format!("http://localhost:{}/callback", REDIRECT_PORT)
}

/// Start a local HTTP server to receive the OAuth callback
fn wait_for_callback() -> Result<(String, String)> {
    let listener = TcpListener::bind(format!("127.0.0.1:{}", REDIRECT_PORT))
        .with_context(|| format!("Failed to bind to port {}", REDIRECT_PORT))?;

    eprintln!("Waiting for OAuth callback on port {}...", REDIRECT_PORT);

    let (mut stream, _) = listener.accept().context("Failed to accept connection")?;

    let mut reader = BufReader::new(&stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;

    // Parse the request to get the code and state
    let url_part = request_line
        .split_whitespace()
        .nth(1)
        .context("Invalid request")?;

    let url = url::Url::parse(&format!("http://localhost{}", url_part))?;

    let code = url
        .query_pairs()
        .find(|(k, _)| k == "code")
        .map(|(_, v)| v.to_string())
        .context("No code in callback")?;

    let state = url
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.to_string())
        .context("No state in callback")?;

    // Send a response to the browser
    let response = "HTTP/1.1 200 OK\r\n\
        Content-Type: text/html\r\n\
        Connection: close\r\n\
        \r\n\
        <html><body>\
        <h1>Authentication successful!</h1>\
        <p>You can close this window and return to the terminal.</p>\
        </body></html>";

    stream.write_all(response.as_bytes())?;
    stream.flush()?;

    Ok((code, state))
}

/// Run the full OAuth authentication flow.
/// Returns the account email.
pub async fn authenticate(config: &AppConfig) -> Result<String> {
    let mut client = Client::new(
        config.client_id.clone(),
        config.client_secret.clone(),
        redirect_uri(),
        String::new(),
        String::new(),
    );

    let scopes: Vec<String> = SCOPES.iter().map(|s| s.to_string()).collect();
    let auth_url = client.user_consent_url(&scopes);

    eprintln!("\nOpen this URL in your browser to authenticate:\n");
    eprintln!("{}\n", auth_url);

    // Try to open the browser automatically
    if open::that(&auth_url).is_err() {
        eprintln!("(Could not open browser automatically, please copy the URL above)");
    }

    let (code, state) = wait_for_callback()?;

    eprintln!("\nReceived authorization code, exchanging for tokens...");

    let access_token = client
        .get_access_token(&code, &state)
        .await
        .context("Failed to exchange code for tokens")?;

    // Discover the user's email via their primary calendar
    let client = Client::new(
        config.client_id.clone(),
        config.client_secret.clone(),
        redirect_uri(),
        access_token.access_token.clone(),
        access_token.refresh_token.clone(),
    );

    let response = client
        .calendar_list()
        .list_all(MinAccessRole::default(), false, false)
        .await
        .context("Failed to list calendars for the new account")?;

    let email = response
        .body
        .iter()
        .find(|cal| cal.primary)
        .map(|cal| cal.id.clone())
        .unwrap_or_else(|| "(unknown)".to_string());

    let session = Session::new(&email, SessionData::from(&access_token));
    session.save()?;

    eprintln!("Authentication successful!");

    Ok(email)
}
