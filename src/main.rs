//! markpad - Markdown to HTML preview renderer

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use markpad::{Editor, RenderConfig};

#[derive(Parser)]
#[command(name = "markpad")]
#[command(version, about = "Markdown to HTML preview renderer", long_about = None)]
#[command(after_help = "EXAMPLES:
    markpad notes.md                  Print rendered HTML
    markpad notes.md notes.html       Write rendered HTML to a file
    markpad --json notes.md           Print source and HTML as JSON")]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output HTML file (defaults to stdout)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// Emit `{ "markdown", "html" }` as JSON instead of bare HTML
    #[arg(long)]
    json: bool,

    /// Base URL for @[web-video](ID) embeds
    #[arg(long, value_name = "URL")]
    embed_url: Option<String>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct Rendered<'a> {
    markdown: &'a str,
    html: &'a str,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut editor = Editor::open(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;

    if let Some(ref url) = cli.embed_url {
        editor.set_config(RenderConfig {
            video_embed_url: url.clone(),
        });
    }

    let body = if cli.json {
        let rendered = Rendered {
            markdown: editor.text(),
            html: editor.html(),
        };
        serde_json::to_string_pretty(&rendered).map_err(|e| e.to_string())?
    } else {
        editor.html().to_string()
    };

    match cli.output {
        Some(ref path) => {
            fs::write(path, body.as_bytes()).map_err(|e| format!("{path}: {e}"))?;
            if !cli.quiet {
                eprintln!("Rendered {} -> {path}", cli.input);
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{body}").map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
