//! Command-line argument parsing.

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::error::{CardsortError, Result};
use crate::sort::{dedupe, parse_sort_list, SortKey};

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI (default)
    Run(RunOptions),
}

/// Flags that override [`AppConfig`] for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub cards_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub sort_order: Option<Vec<SortKey>>,
    pub encounter: Option<bool>,
    pub no_log: bool,
}

impl RunOptions {
    /// Overlay these flags on a config.
    pub fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = self.cards_path {
            config.cards_path = Some(path);
        }
        if let Some(path) = self.catalog_path {
            config.catalog_path = Some(path);
        }
        if let Some(order) = self.sort_order {
            config.sort_order = order;
        }
        if self.encounter.is_some() {
            config.encounter_override = self.encounter;
        }
        if self.no_log {
            config.log_file = None;
        }
        config
    }
}

pub const USAGE: &str = "\
Usage: cardsort [OPTIONS]

Options:
  --cards <PATH>      JSON card file (default: built-in sample)
  --catalog <PATH>    JSON message catalog for translated labels
  --sort <KEYS>       Initial sort order, comma separated (e.g. cost,type)
  --encounter         Always offer encounter-set sorting
  --no-encounter      Only offer encounter-set sorting if already selected
  --no-log            Disable the log file
  -V, --version       Print version
  -h, --help          Print this help

Keys: type, faction, faction_pack, faction_xp, faction_xp_type_cost, cost,
      pack, cycle, title, encounter_set, xp, card_id";

/// Split `--flag=value` into its parts.
fn split_flag(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
        _ => (arg, None),
    }
}

/// Parse command-line arguments into a command.
///
/// The first item is the program name and is skipped. Unknown flags are
/// ignored.
///
/// # Examples
///
/// ```
/// use cardsort::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["cardsort".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = split_flag(&arg);
        let mut value_for = |name: &str| -> Result<String> {
            match inline {
                Some(value) => Ok(value.to_string()),
                None => args
                    .next()
                    .ok_or_else(|| CardsortError::config(name, "missing value")),
            }
        };

        match flag {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--cards" => options.cards_path = Some(PathBuf::from(value_for("--cards")?)),
            "--catalog" => options.catalog_path = Some(PathBuf::from(value_for("--catalog")?)),
            "--sort" => {
                let keys = parse_sort_list(&value_for("--sort")?)?;
                options.sort_order = Some(dedupe(&keys));
            }
            "--encounter" => options.encounter = Some(true),
            "--no-encounter" => options.encounter = Some(false),
            "--no-log" => options.no_log = true,
            _ => {}
        }
    }

    Ok(CliCommand::Run(options))
}
