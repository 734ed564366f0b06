//! Command-line interface for the converter.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_block_id_template, ConvertOptions, OptionsFile};
use crate::convert::{convert, save_html};
use crate::error::{ConvertError, Result};

/// Bills HTML - Convert House and Senate bill XML into semantic HTML.
#[derive(Parser)]
#[command(name = "bills-html")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a bill XML file to HTML.
    Convert {
        /// Bill, resolution or amendment XML file
        #[arg(long = "in", value_name = "INPUT")]
        input: PathBuf,

        /// HTML output file (default: stdout)
        #[arg(long = "out", value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Wrap paragraph-level units in numbered containers
        #[arg(long)]
        blocks: bool,

        /// Block id template, e.g. "sec-{n}"
        #[arg(long, value_name = "TEMPLATE")]
        block_id_template: Option<String>,

        /// YAML options file (keys: blocks, block_id_template)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            blocks,
            block_id_template,
            config,
        } => convert_command(
            &input,
            output.as_deref(),
            blocks,
            block_id_template,
            config.as_deref(),
        ),
    }
}

/// Build options from the optional options file, then apply flags on top.
fn build_options(
    blocks: bool,
    block_id_template: Option<String>,
    config: Option<&Path>,
) -> Result<ConvertOptions> {
    let mut file = match config {
        Some(path) => OptionsFile::load(path)?,
        None => OptionsFile::default(),
    };

    file.blocks |= blocks;
    if let Some(template) = block_id_template {
        validate_block_id_template(&template)?;
        file.block_id_template = Some(template);
    }

    file.into_options()
}

/// Execute the convert command.
fn convert_command(
    input: &Path,
    output: Option<&Path>,
    blocks: bool,
    block_id_template: Option<String>,
    config: Option<&Path>,
) -> Result<()> {
    if !input.is_file() {
        return Err(ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file does not exist: {}", input.display()),
        )));
    }

    let mut options = build_options(blocks, block_id_template, config)?;
    tracing::debug!(?options, input = %input.display(), "Converting");

    let xml = std::fs::read_to_string(input)?;
    let html = convert(&xml, &mut options)?;

    match output {
        Some(path) => {
            save_html(&html, path)?;
            eprintln!(
                "{} {} {} {}",
                style("Converted").green().bold(),
                style(input.display()).cyan(),
                style("to").dim(),
                style(path.display()).cyan()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
