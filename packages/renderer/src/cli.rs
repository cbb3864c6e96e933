//! Command-line interface for the renderer.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{validate_input_path, DEFAULT_INPUT_PATH, DEFAULT_PORT};
use crate::error::Result;
use crate::html::save_html;
use crate::page::render_file;
use crate::render::{ContactStyle, RenderOptions, RootMode};
use crate::server;

/// Vitae renderer - Turn an XML resume into a web page.
#[derive(Parser)]
#[command(name = "vitae-renderer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a resume and serve it on a local port.
    Serve {
        /// Path to the XML document
        #[arg(default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Port to bind
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Render a resume to an HTML file.
    Render {
        /// Path to the XML document
        #[arg(default_value = DEFAULT_INPUT_PATH)]
        input: PathBuf,

        /// Output file (default: input path with .html extension)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Render configuration flags shared by both subcommands.
#[derive(Debug, clap::Args)]
pub struct OptionArgs {
    /// Contact format variant to accept
    #[arg(long, value_enum, default_value = "per-kind")]
    pub contact_style: ContactStyle,

    /// Document root handling
    #[arg(long, value_enum, default_value = "per-child")]
    pub root_mode: RootMode,

    /// Ignore per-element `columns` attribute overrides
    #[arg(long)]
    pub no_column_overrides: bool,
}

impl From<OptionArgs> for RenderOptions {
    fn from(args: OptionArgs) -> Self {
        Self {
            contact_style: args.contact_style,
            root_mode: args.root_mode,
            column_overrides: !args.no_column_overrides,
        }
    }
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            input,
            port,
            options,
        } => serve_command(&input, port, options.into()).await,
        Commands::Render {
            input,
            output,
            options,
        } => render_command(&input, output, options.into()),
    }
}

/// Execute the serve command.
async fn serve_command(input: &Path, port: u16, options: RenderOptions) -> Result<()> {
    validate_input_path(input)?;

    println!(
        "{} {}",
        style("Rendering").bold(),
        style(input.display()).cyan()
    );

    let page = render_file(input, &options)?;
    println!("  Sections: {}", page.section_count());
    println!(
        "{} http://localhost:{}/",
        style("Serving on").green().bold(),
        port
    );

    server::serve(&page, port).await
}

/// Execute the render command.
fn render_command(input: &Path, output: Option<PathBuf>, options: RenderOptions) -> Result<()> {
    validate_input_path(input)?;

    println!(
        "{} {}",
        style("Rendering").bold(),
        style(input.display()).cyan()
    );

    let page = render_file(input, &options)?;
    println!("  Sections: {}", page.section_count());

    let output_path = output.unwrap_or_else(|| input.with_extension("html"));
    let written = save_html(&page, &output_path)?;

    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        written.display()
    );

    Ok(())
}
