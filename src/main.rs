use clap::Parser;
use colored::*;
use github_trending::cli::Cli;
use github_trending::error::{Result, TrendingError};
use github_trending::github::GitHubClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // A non-numeric limit is an invalid limit, same as on the HTTP surface.
    let limit: i64 = cli
        .limit
        .parse()
        .map_err(|_| TrendingError::InvalidLimit(cli.limit.clone()))?;

    println!(
        "{}",
        format!(
            "\nFetching trending repositories (duration: {}, limit: {})...\n",
            cli.duration.to_lowercase(),
            limit
        )
        .blue()
    );

    let client = GitHubClient::new()?;
    let repos = client.fetch_trending(&cli.duration, limit).await?;

    if repos.is_empty() {
        println!("{}", "No repositories found for this duration.".yellow());
        return Ok(());
    }

    println!("{}\n", "Trending Repositories:".green().bold());

    for (index, repo) in repos.iter().enumerate() {
        println!(
            "{}{}",
            format!("{}. {}", index + 1, repo.full_name).bold(),
            format!("  ⭐ {}  🍴 {}", repo.stargazers_count, repo.forks_count).dimmed()
        );
        match &repo.description {
            Some(description) => println!("   {}", description),
            None => println!("   {}", "No description".dimmed()),
        }
        println!(
            "   {}  {}",
            repo.html_url.cyan(),
            repo.language.as_deref().unwrap_or("Unknown").magenta()
        );
        println!();
    }

    Ok(())
}
