use clap::Parser;
use colored::*;
use contributors_gallery::api_client::{ContributorsApi, ProxyClient};
use contributors_gallery::app::App;
use contributors_gallery::cli::{Cli, Command};
use contributors_gallery::config::{ClientConfig, ProxyConfig};
use contributors_gallery::error::Result;
use contributors_gallery::{proxy, render};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port, upstream_url, github_token } => {
            let config = ProxyConfig::new(port, &upstream_url, github_token)?;
            proxy::serve(config).await
        }
        Command::Gallery { owner, repo, api_url } => {
            let config = ClientConfig::new(&api_url)?;
            match (owner, repo) {
                (Some(owner), Some(repo)) => run_once(&config, owner, repo).await,
                _ => run_interactive(&config).await,
            }
        }
    }
}

async fn run_once(config: &ClientConfig, owner: String, repo: String) -> Result<()> {
    let api = ProxyClient::new(config)?;
    let mut app = App::new();
    app.set_owner(owner);
    app.set_repo(repo);

    submit_and_render(&mut app, &api).await;
    Ok(())
}

/// One submission, rendering the in-flight screen and then the outcome.
async fn submit_and_render<A: ContributorsApi>(app: &mut App, api: &A) {
    let Some(submission) = app.begin_submit() else {
        print!("{}", render::render(app));
        return;
    };
    print!("{}", render::render(app));

    let result = api.list_contributors(&submission.query).await;
    app.finish(submission, result);
    print!("{}", render::render(app));
}

/// Prompt for the two form fields until stdin closes.
async fn run_interactive(config: &ClientConfig) -> Result<()> {
    let api = ProxyClient::new(config)?;
    let mut app = App::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", "GitHub Contributors Gallery".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    loop {
        let Some(owner) = prompt(&mut lines, "GitHub Username/Organization: ").await? else {
            break;
        };
        let Some(repo) = prompt(&mut lines, "Repository Name: ").await? else {
            break;
        };

        app.set_owner(owner);
        app.set_repo(repo);

        submit_and_render(&mut app, &api).await;
        println!();
    }

    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, label: &str) -> Result<Option<String>> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(label.bold().to_string().as_bytes()).await?;
    stdout.flush().await?;

    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}
