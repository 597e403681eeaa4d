//! Command-line interface for the harvester.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::batch::{discover_documents, harvest_documents, BatchOptions, BatchReport};
use crate::collector::LinkCollector;
use crate::config::DEFAULT_OUTPUT_FILE;
use crate::error::{HarvesterError, Result};
use crate::harvester::parse_file;

/// XZuFi Harvester - Extract online service links from XZuFi 2.2 messages.
#[derive(Parser)]
#[command(name = "xzufi-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract online service links from XZuFi message files.
    Extract {
        /// XZuFi message files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// File to append links to (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Harvest links from every message listed in the index files of a data dump.
    Harvest {
        /// Root directory of the dump
        root: PathBuf,

        /// File to append links to
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Stop at the first failing message instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },

    /// Print all records of one message as YAML.
    Inspect {
        /// XZuFi message file
        file: PathBuf,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { files, output } => extract_command(&files, output.as_deref()),
        Commands::Harvest {
            root,
            output,
            fail_fast,
        } => harvest_command(&root, &output, fail_fast),
        Commands::Inspect { file } => inspect_command(&file),
    }
}

/// Open the output file for appending, creating it if needed.
fn open_output(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(HarvesterError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Output directory does not exist: {}", parent.display()),
            )));
        }
    }

    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Execute the extract command.
fn extract_command(files: &[PathBuf], output: Option<&Path>) -> Result<()> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(open_output(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let mut collector = LinkCollector::new(sink);

    harvest_documents(
        files,
        &mut collector,
        BatchOptions { fail_fast: true },
        |_| {},
    )?;

    Ok(())
}

/// Execute the harvest command.
fn harvest_command(root: &Path, output: &Path, fail_fast: bool) -> Result<()> {
    if !root.is_dir() {
        return Err(HarvesterError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Dump directory does not exist: {}", root.display()),
        )));
    }

    println!(
        "{} {} into {}",
        style("Harvesting").bold(),
        style(root.display()).cyan(),
        style(output.display()).green()
    );
    println!();

    let documents = discover_documents(root)?;
    let mut collector = LinkCollector::new(BufWriter::new(open_output(output)?));

    let pb = ProgressBar::new(documents.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("valid template")
            .progress_chars("=> "),
    );

    let result = harvest_documents(
        &documents,
        &mut collector,
        BatchOptions { fail_fast },
        |path| {
            pb.set_message(
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            );
            pb.inc(1);
        },
    );
    pb.finish_and_clear();

    let report = result?;
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(HarvesterError::BatchFailed {
            failed: report.failures.len(),
            total: report.documents,
        })
    }
}

fn print_report(report: &BatchReport) {
    println!("  Documents: {}", report.documents);
    println!("  Links: {}", style(report.links).green());
    if !report.is_success() {
        println!("  Failed: {}", style(report.failures.len()).red().bold());
        for failure in &report.failures {
            eprintln!("  {} {}", style("✗").red(), failure.error);
        }
    }
}

/// Execute the inspect command.
fn inspect_command(file: &Path) -> Result<()> {
    let message = parse_file(file)?;
    let yaml = serde_yaml_ng::to_string(&message)?;
    print!("{yaml}");
    Ok(())
}
