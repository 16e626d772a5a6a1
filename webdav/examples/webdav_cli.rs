// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! `WebDAV` client validation tool.
//!
//! This is a standalone CLI example for testing the `WebDAV` client
//! implementation against real servers. It serves as both a validation tool
//! and example code for using the `WebDavClient` API.

use std::error::Error;
use std::io::Write as _;

use clap::{Parser, Subcommand};
use colored::Colorize as _;
use fuelog_webdav::{WebDavClient, WebDavConfig};

/// `WebDAV` client validation tool.
#[derive(Parser)]
#[command(name = "webdav_cli")]
#[command(about = "WebDAV client validation tool", long_about = None)]
#[command(version)]
struct Cli {
    /// WebDAV server URL
    #[arg(long)]
    server: Option<String>,
    /// Username for basic auth
    #[arg(long)]
    username: Option<String>,
    /// Password for basic auth
    #[arg(long)]
    password: Option<String>,
    /// Sync folder relative to the server URL
    #[arg(long, default_value = "")]
    path: String,
    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Probe the server with a Depth-0 PROPFIND
    Test,
    /// Upload a local file into the sync folder
    Upload {
        /// Remote filename
        filename: String,
        /// Local file path (or "-" for stdin)
        input: String,
    },
    /// Download a file from the sync folder to stdout
    Download {
        /// Remote filename
        filename: String,
    },
    /// Check whether a file exists in the sync folder
    Exists {
        /// Remote filename
        filename: String,
    },
    /// Print the Last-Modified time of a file
    LastModified {
        /// Remote filename
        filename: String,
    },
}

impl Cli {
    fn build_config(&self) -> Result<WebDavConfig, Box<dyn Error>> {
        // Read from environment variables first
        let server = self
            .server
            .clone()
            .or_else(|| std::env::var("FUELOG_WEBDAV_SERVER").ok())
            .ok_or_else(|| {
                "FUELOG_WEBDAV_SERVER must be provided via --server or FUELOG_WEBDAV_SERVER env var"
                    .to_string()
            })?;

        let username = self
            .username
            .clone()
            .or_else(|| std::env::var("FUELOG_WEBDAV_USERNAME").ok())
            .unwrap_or_default();

        let password = self
            .password
            .clone()
            .or_else(|| std::env::var("FUELOG_WEBDAV_PASSWORD").ok())
            .unwrap_or_default();

        Ok(WebDavConfig {
            url: server,
            username,
            password,
            path: self.path.clone(),
            timeout_secs: self.timeout,
            user_agent: "fuelog-webdav-cli/0.1.0".to_string(),
        })
    }
}

async fn cmd_test(client: &WebDavClient) -> Result<(), Box<dyn Error>> {
    client.test_connection().await?;
    println!("{}", "✓ Server reachable".green());
    Ok(())
}

async fn cmd_upload(client: &WebDavClient, filename: &str, input: &str) -> Result<(), Box<dyn Error>> {
    let content = if input == "-" {
        let mut buf = Vec::new();
        std::io::Read::read_to_end(&mut std::io::stdin(), &mut buf)?;
        buf
    } else {
        std::fs::read(input)?
    };

    client.upload_file(filename, &content).await?;
    println!("{}", "✓ File uploaded successfully".green());
    println!("Url: {}", client.resolve_path(filename));
    Ok(())
}

async fn cmd_download(client: &WebDavClient, filename: &str) -> Result<(), Box<dyn Error>> {
    match client.download_file(filename).await? {
        Some(content) => {
            print!("{content}");
            Ok(())
        }
        None => Err(format!("Remote file not found: {filename}").into()),
    }
}

async fn cmd_exists(client: &WebDavClient, filename: &str) -> Result<(), Box<dyn Error>> {
    if client.file_exists(filename).await? {
        println!("{}", "✓ File exists".green());
    } else {
        println!("{}", "⚠ File not found".yellow());
    }
    Ok(())
}

async fn cmd_last_modified(client: &WebDavClient, filename: &str) -> Result<(), Box<dyn Error>> {
    match client.last_modified(filename).await? {
        Some(modified) => println!("Last modified: {modified}"),
        None => println!("{}", "⚠ No Last-Modified reported".yellow()),
    }
    Ok(())
}

/// Format error for user-friendly display.
fn format_error(err: &dyn Error) -> String {
    let err_str = err.to_string();
    if err_str.contains("401") || err_str.contains("403") {
        format!("{} Authentication failed", "Error:".red().bold())
    } else if err_str.contains("404") {
        format!("{} Resource not found", "Error:".red().bold())
    } else if err_str.contains("Network") || err_str.contains("connection") {
        format!(
            "{} Network error - check server URL and connection",
            "Error:".red().bold()
        )
    } else {
        format!("{} {}", "Error:".red().bold(), err_str)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env files (if they exist)
    // Priority: .env.local (highest) -> .env -> existing environment variables (lowest)
    dotenvy::dotenv().ok(); // Load .env
    dotenvy::from_filename(".env.local").ok(); // Load .env.local (overrides .env)

    let cli = Cli::parse();
    let config = cli.build_config()?;
    let client = WebDavClient::new(config)?;

    // Create a new runtime for the async operations
    let runtime = tokio::runtime::Runtime::new()?;

    let result = runtime.block_on(async {
        match cli.command {
            Commands::Test => cmd_test(&client).await,
            Commands::Upload { filename, input } => cmd_upload(&client, &filename, &input).await,
            Commands::Download { filename } => cmd_download(&client, &filename).await,
            Commands::Exists { filename } => cmd_exists(&client, &filename).await,
            Commands::LastModified { filename } => cmd_last_modified(&client, &filename).await,
        }
    });

    if let Err(e) = result {
        // Flush stdout before printing error
        std::io::stdout().flush().ok();
        eprintln!("{}", format_error(e.as_ref()));
        std::process::exit(1);
    }

    Ok(())
}
