mod api;
mod output;
mod token;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qrwire::image::{PREVIEW_SIZE, image_url};
use qrwire::query::parse_date_input;
use qrwire::validate::{validate_content, validate_share_email};
use qrwire::{
    AuthResponse, CreateQrCodeRequest, ListQuery, LoginRequest, PAGE_SIZE, Paginated, QrCode, QrCodeType,
    RegisterRequest, ShareRequest, User, endpoints,
};
use serde_json::Value;

use crate::api::ApiClient;
use crate::token::TokenFile;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `qrcodes login` first")]
    NotLoggedIn,
    #[error("no home directory for the token file; pass --token-file or set QR_TOKEN_FILE")]
    NoTokenPath,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("token file {}: {source}", .path.display())]
    TokenFile { path: PathBuf, source: std::io::Error },
    #[error("{0}")]
    Validation(#[from] qrwire::ValidationError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "qrcodes", about = "QR code system API CLI")]
struct Cli {
    /// REST base URL, including the `/api` prefix.
    #[arg(long, env = "QR_BASE_URL", default_value = "http://localhost:5000/api")]
    base_url: String,

    /// Where the bearer token is kept between runs (default `~/.qrcodes-token`).
    #[arg(long, env = "QR_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the returned token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and store the returned token.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored token.
    Logout,
    /// Show the signed-in user.
    Me,
    /// List QR codes, one page at a time.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Inclusive start day, `YYYY-MM-DD`.
        #[arg(long)]
        start: Option<String>,
        /// Inclusive end day, `YYYY-MM-DD`.
        #[arg(long)]
        end: Option<String>,
        /// Print the raw response instead of a summary.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Create a QR code from a URL (default) or text.
    Generate {
        content: String,
        #[arg(long, default_value_t = false)]
        text: bool,
        #[arg(long)]
        title: Option<String>,
    },
    /// Email a QR code to someone.
    Share { id: String, email: String },
    /// Print the rendered image URL for some content without calling the API.
    ImageUrl {
        content: String,
        #[arg(long, default_value_t = PREVIEW_SIZE)]
        size: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Cli { base_url, token_file, command } = cli;
    let token_file = || match &token_file {
        Some(path) => Ok(TokenFile::new(path.clone())),
        None => TokenFile::default_location().ok_or(CliError::NoTokenPath),
    };

    match command {
        Command::ImageUrl { content, size } => {
            println!("{}", image_url(&content, size));
            Ok(())
        }
        Command::Login { email, password } => {
            let api = ApiClient::new(&base_url, None)?;
            let resp: AuthResponse = api.post_json(endpoints::LOGIN, &LoginRequest { email, password }).await?;
            let token_file = token_file()?;
            token_file.save(&resp.token)?;
            println!("Welcome back, {}!", resp.user.name);
            eprintln!("token saved to {}", token_file.path().display());
            Ok(())
        }
        Command::Register { name, email, password } => {
            let api = ApiClient::new(&base_url, None)?;
            let body = RegisterRequest { name, email, password };
            let resp: AuthResponse = api.post_json(endpoints::REGISTER, &body).await?;
            let token_file = token_file()?;
            token_file.save(&resp.token)?;
            println!("Welcome, {}!", resp.user.name);
            eprintln!("token saved to {}", token_file.path().display());
            Ok(())
        }
        Command::Logout => {
            token_file()?.clear()?;
            println!("You have been successfully logged out.");
            Ok(())
        }
        Command::Me => {
            let api = signed_in(&base_url, &token_file()?)?;
            let user: User = api.get_json(endpoints::CURRENT_USER, &[]).await?;
            println!("{} <{}> ({})", user.name, user.email, user.id);
            Ok(())
        }
        Command::List { page, start, end, json } => {
            let api = signed_in(&base_url, &token_file()?)?;
            let start = parse_date_input(start.as_deref().unwrap_or_default())?;
            let end = parse_date_input(end.as_deref().unwrap_or_default())?;
            let query = ListQuery::new(page).with_range(start, end);
            if json {
                let value: Value = api.get_json(endpoints::QR_CODES, &query.to_pairs()).await?;
                return print_json(&value);
            }
            let listing: Paginated<QrCode> = api.get_json(endpoints::QR_CODES, &query.to_pairs()).await?;
            print!("{}", output::render_listing(&listing, query.page, PAGE_SIZE));
            Ok(())
        }
        Command::Generate { content, text, title } => {
            let api = signed_in(&base_url, &token_file()?)?;
            let kind = if text { QrCodeType::Text } else { QrCodeType::Url };
            let content = validate_content(kind, &content)?;
            let body = CreateQrCodeRequest::new(content, kind, title.as_deref());
            let code: QrCode = api.post_json(endpoints::QR_CODES, &body).await?;
            print!("{}", output::render_generated(&code, &body.content));
            Ok(())
        }
        Command::Share { id, email } => {
            let api = signed_in(&base_url, &token_file()?)?;
            let email = validate_share_email(&email)?;
            api.post_empty(&endpoints::share(&id), &ShareRequest { email: email.clone() }).await?;
            println!("Your QR code has been shared to {email}.");
            Ok(())
        }
    }
}

fn signed_in(base_url: &str, token_file: &TokenFile) -> Result<ApiClient, CliError> {
    let token = token_file.load()?.ok_or(CliError::NotLoggedIn)?;
    ApiClient::new(base_url, Some(token))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
