use clap::Parser;

#[derive(Parser)]
#[command(name = "trending-repos")]
#[command(about = "Fetch trending GitHub repositories created within a recent time window")]
#[command(version)]
pub struct Cli {
    /// Duration to fetch trending repositories for (day|week|month|year)
    #[arg(short, long, default_value = "week")]
    pub duration: String,

    /// Number of repositories to display (1-100)
    #[arg(short, long, default_value = "10")]
    pub limit: String,
}
