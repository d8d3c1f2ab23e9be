use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_API_URL, DEFAULT_PORT, DEFAULT_UPSTREAM_URL};

#[derive(Parser)]
#[command(name = "contributors-gallery")]
#[command(
    about = "GitHub Contributors Gallery - proxy service and terminal client for contributor lists"
)]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the proxy service
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Base URL of the upstream GitHub API
        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_UPSTREAM_URL)]
        upstream_url: String,

        /// Optional GitHub token, sent as a bearer token when set
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        github_token: Option<String>,
    },

    /// Look up contributors through the proxy and render them as a gallery
    Gallery {
        /// GitHub username or organization
        owner: Option<String>,

        /// Repository name
        repo: Option<String>,

        /// Base URL of the proxy service
        #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
    },
}
