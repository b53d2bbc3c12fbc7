//! Command-line interface for tcx2kmz.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{is_stdio, validate_input_path, OutputFormat, DEFAULT_INDENT};
use crate::error::Result;
use crate::kml::from_activities;
use crate::output::write_output;
use crate::tcx::{parse_tcx, TrainingCenterDatabase};
use crate::yaml::generate_yaml;

/// tcx2kmz - Convert Training Center activity files to KML tracks.
#[derive(Parser)]
#[command(name = "tcx2kmz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a TCX file to KML or YAML.
    Convert {
        /// Input TCX file (`-` for standard input)
        input: PathBuf,

        /// Output file (default: standard output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Write KML on a single line instead of indenting it
        #[arg(long)]
        compact: bool,
    },

    /// Print activity, lap and trackpoint counts of a TCX file.
    Summary {
        /// Input TCX file (`-` for standard input)
        input: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            compact,
        } => convert_command(&input, output.as_deref(), format, compact),
        Commands::Summary { input } => summary_command(&input),
    }
}

/// Read and parse the input file or standard input.
fn load(input: &Path) -> Result<TrainingCenterDatabase> {
    validate_input_path(input)?;

    let text = if is_stdio(input) {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(input)?
    };
    parse_tcx(&text)
}

/// Render a parsed database in the requested format.
pub fn render(
    database: &TrainingCenterDatabase,
    format: OutputFormat,
    compact: bool,
) -> Result<String> {
    match format {
        OutputFormat::Kml => {
            let document = from_activities(database);
            Ok(if compact {
                document.to_compact_string()
            } else {
                document.to_pretty_string(DEFAULT_INDENT)
            })
        }
        OutputFormat::Yaml => generate_yaml(database),
    }
}

/// Execute the convert command.
fn convert_command(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    compact: bool,
) -> Result<()> {
    let database = load(input)?;
    let content = render(&database, format, compact)?;
    write_output(output, &content)?;

    // Status goes to stderr so it never mixes with converted output on stdout
    if let Some(path) = output.filter(|p| !is_stdio(p)) {
        eprintln!(
            "{} {} ({} activities, {} trackpoints)",
            style("Saved to:").green().bold(),
            path.display(),
            database.activities.len(),
            database.trackpoint_count()
        );
    }
    Ok(())
}

/// Execute the summary command.
fn summary_command(input: &Path) -> Result<()> {
    let database = load(input)?;

    println!("{} {}", style("Summary of").bold(), style(input.display()).cyan());
    println!();
    for activity in &database.activities {
        println!(
            "  {} {}",
            style(activity.sport.as_deref().unwrap_or("Activity")).green(),
            activity.id.as_deref().unwrap_or("")
        );
        if let Some(name) = activity.creator.as_ref().and_then(|c| c.name.as_deref()) {
            println!("    Device: {name}");
        }
        println!("    Laps: {}", activity.laps.len());
        println!("    Trackpoints: {}", activity.trackpoint_count());
    }
    println!();
    println!(
        "{} activities, {} laps, {} trackpoints",
        style(database.activities.len()).bold(),
        style(database.lap_count()).bold(),
        style(database.trackpoint_count()).bold()
    );
    Ok(())
}
