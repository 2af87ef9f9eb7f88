//! markdown-pagegen CLI
//!
//! Generates HTML pages from Markdown, one file at a time or for a whole
//! content directory.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use markdown_pagegen_config::Config;
use markdown_pagegen_engine::{generate_page, generate_pages_recursive};
use std::path::PathBuf;

/// Markdown to HTML page generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a single page
    Page {
        /// Markdown source file
        #[arg(long)]
        from: PathBuf,
        /// HTML template file
        #[arg(long)]
        template: PathBuf,
        /// Output HTML file
        #[arg(long)]
        dest: PathBuf,
    },
    /// Generate a page for every Markdown file under a content directory
    Site(SiteArgs),
}

#[derive(Args, Debug)]
struct SiteArgs {
    /// Content directory (falls back to the config file)
    #[arg(long)]
    content: Option<PathBuf>,
    /// HTML template file (falls back to the config file)
    #[arg(long)]
    template: Option<PathBuf>,
    /// Output directory (falls back to the config file)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
struct SitePaths {
    content: PathBuf,
    template: PathBuf,
    output: PathBuf,
}

impl SiteArgs {
    fn is_complete(&self) -> bool {
        self.content.is_some() && self.template.is_some() && self.output.is_some()
    }

    fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Loads the config file. A file named with `--config` must exist.
    fn load_config(&self) -> Result<Option<Config>> {
        let config_path = self.config_path();
        log::info!("Config path: {}", config_path.display());

        let config = Config::load_from_path(&config_path)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

        if config.is_none() && self.config.is_some() {
            return Err(anyhow!("Config file not found: {}", config_path.display()));
        }
        Ok(config)
    }

    /// Flags win; anything not given comes from `config`.
    fn resolve(self, config: Option<Config>) -> Result<SitePaths> {
        let config_path = self.config_path();
        let missing = |flag: &str| {
            anyhow!(
                "No --{flag} given and no config file found at {}",
                config_path.display()
            )
        };

        let (content, template, output) = match config {
            Some(config) => (
                self.content.unwrap_or(config.content_path),
                self.template.unwrap_or(config.template_path),
                self.output.unwrap_or(config.output_path),
            ),
            None => (
                self.content.ok_or_else(|| missing("content"))?,
                self.template.ok_or_else(|| missing("template"))?,
                self.output.ok_or_else(|| missing("output"))?,
            ),
        };

        Ok(SitePaths {
            content,
            template,
            output,
        })
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Page {
            from,
            template,
            dest,
        } => {
            generate_page(&from, &template, &dest)
                .with_context(|| format!("Failed to generate page from {}", from.display()))?;
            println!("Wrote {}", dest.display());
        }
        Command::Site(args) => {
            let config = if args.is_complete() {
                None
            } else {
                args.load_config()?
            };
            let paths = args.resolve(config)?;

            let written = generate_pages_recursive(&paths.content, &paths.template, &paths.output)
                .with_context(|| {
                    format!("Failed to generate site from {}", paths.content.display())
                })?;
            println!(
                "Wrote {} pages to {}",
                written.len(),
                paths.output.display()
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    run(cli.command)
}
