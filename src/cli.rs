use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use routeurl::{OmitPolicy, QueryMap, QueryValue, RouteConfig, RouteUrl, UrlCodec};

/// Top-level CLI for decomposing and rebuilding URLs.
#[derive(Debug, Parser)]
#[command(name = "routeurl")]
#[command(about = "Decompose URLs into routing parts and rebuild them", long_about = None)]
pub struct Cli {
    /// Config file to use instead of the XDG `routeurl/config.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Render `undefined`, `null` and `false` query values instead of dropping them.
    #[arg(long, global = true)]
    pub keep_all: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Query parameters to merge into a URL.
#[derive(Debug, Default, Args)]
pub struct OverlayArgs {
    /// Set a query parameter (repeatable).
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub set: Vec<(String, String)>,

    /// Remove a query parameter (repeatable).
    #[arg(long = "unset", value_name = "KEY")]
    pub unset: Vec<String>,
}

impl OverlayArgs {
    /// The overlay mapping, or `None` when no parameter was given.
    pub fn to_overlay(&self) -> Option<QueryMap> {
        if self.set.is_empty() && self.unset.is_empty() {
            return None;
        }

        let mut overlay = QueryMap::new();
        for (key, value) in &self.set {
            overlay.insert(key.clone(), QueryValue::from(value));
        }
        for key in &self.unset {
            overlay.insert(key.clone(), QueryValue::Undefined);
        }
        Some(overlay)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse a URL and print its parts as JSON.
    Parse {
        /// URL, path, or host/path to decompose.
        url: String,

        #[command(flatten)]
        overlay: OverlayArgs,
    },

    /// Decode a query string (or the query of a URL) and print it as JSON.
    Query {
        /// Raw query string, with or without a leading URL.
        raw: String,
    },

    /// Read parsed URL JSON from stdin and print the reassembled URL.
    Build {
        #[command(flatten)]
        overlay: OverlayArgs,
    },
}

/// Split `KEY=VALUE` at the first `=`.
fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))?;
    if key.is_empty() {
        return Err(format!("empty key in {s:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let output = cli.execute(|| {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        })?;
        println!("{output}");
        Ok(())
    }

    /// Load config, apply flags, and build the codec.
    pub fn codec(&self) -> Result<UrlCodec> {
        let cfg = match &self.config {
            Some(path) => RouteConfig::load(path)?,
            None => RouteConfig::load_or_default()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let mut codec = UrlCodec::from_config(&cfg);
        if self.keep_all {
            codec = codec.with_policy(OmitPolicy::KeepAll);
        }
        Ok(codec)
    }

    /// Run the command and return what should be printed.
    pub fn execute(&self, read_input: impl FnOnce() -> Result<String>) -> Result<String> {
        let codec = self.codec()?;

        match &self.command {
            CliCommand::Parse { url, overlay } => {
                tracing::debug!("parse url={}", url);
                let parsed = codec
                    .parse(url, overlay.to_overlay().as_ref())
                    .with_context(|| format!("failed to parse {url:?}"))?;
                Ok(serde_json::to_string_pretty(&parsed)?)
            }
            CliCommand::Query { raw } => {
                let query = codec
                    .string_to_query(raw)
                    .with_context(|| format!("failed to decode {raw:?}"))?;
                Ok(serde_json::to_string_pretty(&query)?)
            }
            CliCommand::Build { overlay } => {
                let input = read_input()?;
                let url: RouteUrl =
                    serde_json::from_str(&input).context("stdin is not a parsed URL object")?;
                tracing::debug!("build url={}", url.url);
                Ok(codec.serialize(&url, overlay.to_overlay().as_ref()))
            }
        }
    }
}
