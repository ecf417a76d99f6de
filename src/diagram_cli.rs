//! diagram subcommands - render, show, list arrows

use crate::fixture::FixtureDocument;
use clap::Subcommand;
use dot::{DotGenerator, ShowReport, Viewer, ViewerConfig};
use graph::{make_arrows, Diagram, Entity};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum DiagramCommands {
    /// Print the DOT document for a fixture file
    Render {
        /// Fixture document (JSON)
        path: PathBuf,
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render and open the diagram viewer
    Show {
        /// Fixture document (JSON)
        path: PathBuf,
    },
    /// List inferred arrows before combination
    Arrows {
        /// Fixture document (JSON)
        path: PathBuf,
        /// JSON output
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(cmd: DiagramCommands) -> anyhow::Result<()> {
    match cmd {
        DiagramCommands::Render { path, output } => cmd_render(&path, output.as_deref()),
        DiagramCommands::Show { path } => cmd_show(&path).await,
        DiagramCommands::Arrows { path, json } => cmd_arrows(&path, json),
    }
}

fn build_lines(doc: &FixtureDocument, generator: &DotGenerator) -> anyhow::Result<Vec<String>> {
    let views = doc.entities();
    let entities: Vec<&dyn Entity> = views.iter().map(|e| e as &dyn Entity).collect();

    let diagram = Diagram::build(&doc.config, &entities)?;
    Ok(generator.render_diagram(&diagram))
}

fn cmd_render(path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let doc = FixtureDocument::load(path)?;
    let generator = DotGenerator::new();
    let source = generator.document(&build_lines(&doc, &generator)?);

    match output {
        Some(file) => {
            std::fs::write(file, source)?;
            eprintln!("Saved to: {}", file.display());
        }
        None => print!("{}", source),
    }

    Ok(())
}

async fn cmd_show(path: &Path) -> anyhow::Result<()> {
    let doc = FixtureDocument::load(path)?;
    let generator = DotGenerator::new();
    let lines = build_lines(&doc, &generator)?;

    let viewer = Viewer::new(ViewerConfig::from_env());
    match viewer.show(&generator, &lines).await {
        Ok(ShowReport::Empty) => println!("Found no relations, not showing dot graph"),
        Ok(ShowReport::Shown) => {}
        Ok(ShowReport::Failed { source, status, stdout, stderr }) => {
            tracing::warn!("viewer failed with status {:?}", status);
            eprintln!("Failed to run dot with this input file content:");
            eprintln!("{}", source);
            eprintln!("dot stdout:\n{}", stdout);
            eprintln!("dot stderr:\n{}", stderr);
        }
        Err(e) => {
            tracing::warn!("could not run viewer: {}", e);
            eprintln!("{}", generator.document(&lines));
        }
    }

    Ok(())
}

fn cmd_arrows(path: &Path, json: bool) -> anyhow::Result<()> {
    let doc = FixtureDocument::load(path)?;
    let views = doc.entities();
    let entities: Vec<&dyn Entity> = views.iter().map(|e| e as &dyn Entity).collect();

    let mut arrows = make_arrows(&doc.config, &entities)?;
    arrows.sort();

    if json {
        println!("{}", serde_json::to_string_pretty(&arrows)?);
    } else {
        for arrow in &arrows {
            println!("{}", arrow);
        }
    }

    Ok(())
}
