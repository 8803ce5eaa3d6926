//! docsite - render and inspect a Markdown documentation tree

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use docsite_config::{Config, ExcludeMatcher};
use docsite_engine::{
    Conversion, Converter, FrontMatter, HeadingIdPolicy, OutlineEntry, OutlineTree,
    build_metadata_index, filter_index, render_outline_html, render_outline_tree_html, scan_docs,
    split_front_matter,
};
use log::{LevelFilter, debug, info};
use relative_path::RelativePath;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "docsite")]
#[command(version, about = "Safe Markdown rendering for documentation sites", long_about = None)]
#[command(after_help = "EXAMPLES:
    docsite render docs/index.md            Print the page as HTML
    docsite render --json docs/index.md     HTML, outline and front matter as JSON
    docsite outline --tree docs/guide.md    Nested outline as HTML lists
    docsite index docs                      Front matter of every page as JSON
    docsite search rust docs                Pages whose title, path or tags mention rust")]
struct Cli {
    /// Config file [default: ~/.config/docsite/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Markdown file to HTML
    Render {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print {html, outline, front_matter} as JSON
        #[arg(long)]
        json: bool,
        /// Give repeated headings distinct ids
        #[arg(long)]
        unique_ids: bool,
        /// Append the sidebar outline after the page HTML
        #[arg(long)]
        with_outline: bool,
    },
    /// Print the heading outline of a Markdown file
    Outline {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Nest headings under their parents
        #[arg(long)]
        tree: bool,
        /// Print JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Print the navigation tree of a docs directory
    Tree {
        /// Docs directory [default: docs_path from the config]
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Print the front matter of every document as JSON
    Index {
        /// Docs directory [default: docs_path from the config]
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
    /// Print index entries whose title, path or tags contain a term
    Search {
        /// Case-insensitive search term
        term: String,
        /// Docs directory [default: docs_path from the config]
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    html: &'a str,
    outline: &'a [OutlineEntry],
    front_matter: Option<&'a FrontMatter>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render {
            file,
            json,
            unique_ids,
            with_outline,
        } => {
            let source = read_source(&file)?;
            let (front_matter, body) = split_front_matter(&source);
            let conversion = convert(&config, unique_ids, body, &file)?;

            if json {
                let output = RenderOutput {
                    html: &conversion.html,
                    outline: &conversion.outline,
                    front_matter: front_matter.as_ref(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
            } else {
                write!(out, "{}", conversion.html)?;
                if with_outline {
                    writeln!(out, "{}", render_outline_html(&conversion.outline))?;
                }
            }
        }
        Command::Outline { file, tree, json } => {
            let source = read_source(&file)?;
            let (_, body) = split_front_matter(&source);
            let outline = convert(&config, false, body, &file)?.outline;

            match (tree, json) {
                (true, true) => writeln!(
                    out,
                    "{}",
                    serde_json::to_string_pretty(&OutlineTree::from_entries(&outline))?
                )?,
                (true, false) => writeln!(
                    out,
                    "{}",
                    render_outline_tree_html(&OutlineTree::from_entries(&outline))
                )?,
                (false, true) => writeln!(out, "{}", serde_json::to_string_pretty(&outline)?)?,
                (false, false) => writeln!(out, "{}", render_outline_html(&outline))?,
            }
        }
        Command::Tree { dir } => {
            let root = dir.unwrap_or_else(|| config.docs_path.clone());
            let matcher = config.exclude_matcher()?;
            let tree = scan_docs(&root, excluder(&matcher))
                .with_context(|| format!("Failed to scan {}", root.display()))?;
            write!(out, "{}", tree.to_text())?;
        }
        Command::Index { dir } => {
            let root = dir.unwrap_or_else(|| config.docs_path.clone());
            let matcher = config.exclude_matcher()?;
            let index = build_metadata_index(&root, excluder(&matcher))
                .with_context(|| format!("Failed to index {}", root.display()))?;
            info!("indexed {} documents with front matter", index.len());
            writeln!(out, "{}", serde_json::to_string_pretty(&index)?)?;
        }
        Command::Search { term, dir } => {
            let root = dir.unwrap_or_else(|| config.docs_path.clone());
            let matcher = config.exclude_matcher()?;
            let index = build_metadata_index(&root, excluder(&matcher))
                .with_context(|| format!("Failed to index {}", root.display()))?;
            let hits = filter_index(&index, &term);
            info!("{} of {} documents match {term:?}", hits.len(), index.len());
            writeln!(out, "{}", serde_json::to_string_pretty(&hits)?)?;
        }
    }
    Ok(())
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => Ok(config),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?.unwrap_or_default();
            debug!("using docs path {}", config.docs_path.display());
            Ok(config)
        }
    }
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn convert(config: &Config, unique_ids: bool, body: &str, file: &Path) -> Result<Conversion> {
    let mut options = config.convert_options();
    if unique_ids {
        options.heading_ids = HeadingIdPolicy::Unique;
    }
    Converter::new(options)
        .convert(body)
        .with_context(|| format!("Failed to convert {}", file.display()))
}

fn excluder(matcher: &ExcludeMatcher) -> impl Fn(&RelativePath) -> bool + '_ {
    move |path: &RelativePath| matcher.is_excluded(path.as_str())
}
