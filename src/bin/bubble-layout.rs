use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bubble-layout", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a scene and print the placement as JSON.
    Place(PlaceArgs),
    /// Print per-direction scores and the selected direction.
    Scores(ScoresArgs),
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ScoresArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Place(args) => cmd_place(args),
        Command::Scores(args) => cmd_scores(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<bubble_layout::Scene> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let mut s = String::new();
    BufReader::new(f)
        .read_to_string(&mut s)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    let scene = bubble_layout::Scene::from_json(&s).with_context(|| "parse scene JSON")?;
    Ok(scene)
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let placement = scene.place();
    if placement.is_none() {
        eprintln!("layout skipped: container or content has no area");
    }

    let out = if args.pretty {
        serde_json::to_string_pretty(&placement)?
    } else {
        serde_json::to_string(&placement)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_scores(args: ScoresArgs) -> anyhow::Result<()> {
    let scene = read_scene_json(&args.in_path)?;
    let Some(report) = scene.scores() else {
        anyhow::bail!("scene has no anchor, or its container/content has no area");
    };

    let bubble = report.bubble;
    println!("bubble:   {} x {}", bubble.width, bubble.height);
    for dir in bubble_layout::PointerDirection::CANDIDATES {
        let allowed = scene.config.allowed_directions.allows(dir);
        let score = report.scores.get(dir).unwrap_or(f64::NAN);
        let mark = if dir == report.selected { "*" } else { " " };
        let note = if allowed { "" } else { " (not allowed)" };
        println!("{mark} {:<6} {score:>10.2}{note}", format!("{dir:?}"));
    }
    Ok(())
}
