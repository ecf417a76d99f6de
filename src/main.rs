//! fixturegraph - fixture 关系图

mod diagram_cli;
mod fixture;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixturegraph")]
#[command(about = "Infer and render relationships between test fixtures", version)]
struct Cli {
    #[command(subcommand)]
    command: diagram_cli::DiagramCommands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    diagram_cli::run(cli.command).await
}
