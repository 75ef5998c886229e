// wildfst-cli: shared plumbing for the command-line tools.

pub mod att;
pub mod options;

use std::fmt;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use wildfst_core::{LabelError, PassConfig};
use wildfst_fst::{FstError, VectorFst};
use wildfst_rules::{ArcLocation, ProjectionSide};

pub use att::{read_att, write_att};
pub use options::{CONFIG_ENV, Options, parse_options};

/// Error type for the CLI tools.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid label configuration: {0}")]
    Label(#[from] LabelError),
    #[error(transparent)]
    Fst(#[from] FstError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A pass selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    DemoteInput,
    DemoteOutput,
    Restore,
    Expand,
    Strip,
    Close,
    ProjectInput,
    ProjectOutput,
    InputEpsilon,
    OutputEpsilon,
    SyncRule,
}

impl Pass {
    pub const ALL: [Pass; 11] = [
        Pass::DemoteInput,
        Pass::DemoteOutput,
        Pass::Restore,
        Pass::Expand,
        Pass::Strip,
        Pass::Close,
        Pass::ProjectInput,
        Pass::ProjectOutput,
        Pass::InputEpsilon,
        Pass::OutputEpsilon,
        Pass::SyncRule,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pass::DemoteInput => "demote-input",
            Pass::DemoteOutput => "demote-output",
            Pass::Restore => "restore",
            Pass::Expand => "expand",
            Pass::Strip => "strip",
            Pass::Close => "close",
            Pass::ProjectInput => "project-input",
            Pass::ProjectOutput => "project-output",
            Pass::InputEpsilon => "input-epsilon",
            Pass::OutputEpsilon => "output-epsilon",
            Pass::SyncRule => "sync-rule",
        }
    }

    /// Run the pass on `fst` with labels from `config`.
    pub fn run(self, fst: &mut VectorFst, config: &PassConfig) -> Result<(), CliError> {
        let labels = &config.wildcards;
        match self {
            Pass::DemoteInput => wildfst_rules::demote_input_other(fst, labels),
            Pass::DemoteOutput => wildfst_rules::demote_output_other(fst, labels),
            Pass::Restore => wildfst_rules::restore_after_compose(fst, labels)?,
            Pass::Expand | Pass::Close => {
                let alphabet = config.expansion_alphabet()?;
                if alphabet.is_empty() {
                    tracing::warn!(pass = self.name(), "empty alphabet, nothing to expand");
                }
                let symbols = if self == Pass::Expand {
                    wildfst_rules::expand_other_arcs(fst, &alphabet, labels)?
                } else {
                    wildfst_rules::close_alphabet(fst, &alphabet, labels)?
                };
                tracing::info!(symbols = symbols.len(), pass = self.name(), "alphabet spelled out");
            }
            Pass::Strip => wildfst_rules::delete_other_arcs(fst, labels),
            Pass::ProjectInput => {
                wildfst_rules::normalize_projection(fst, ProjectionSide::Input, labels)
            }
            Pass::ProjectOutput => {
                wildfst_rules::normalize_projection(fst, ProjectionSide::Output, labels)
            }
            Pass::InputEpsilon => wildfst_rules::change_input_to_epsilon(fst, labels),
            Pass::OutputEpsilon => wildfst_rules::change_output_to_epsilon(fst, labels),
            Pass::SyncRule => {
                let rule = config.rule.ok_or_else(|| {
                    CliError::Usage(
                        "sync-rule needs --separator and --hard-epsilon".to_string(),
                    )
                })?;
                wildfst_rules::synchronize_alt_rule(fst, &rule, labels)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Pass {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pass::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CliError::Usage(format!("unknown pass {s:?}")))
    }
}

/// Wildcard audit of one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub disallowed: Vec<ArcLocation>,
    pub has_wildcards: bool,
    pub semantic_acceptor: bool,
}

impl CheckReport {
    pub fn new(fst: &VectorFst, config: &PassConfig) -> Self {
        let labels = &config.wildcards;
        Self {
            disallowed: wildfst_rules::disallowed_pairs(fst, labels),
            has_wildcards: wildfst_rules::contains_wildcard(fst, labels),
            semantic_acceptor: wildfst_rules::is_semantic_acceptor(fst, labels),
        }
    }

    /// No arc pairs OTHER_ID with anything else.
    pub fn is_clean(&self) -> bool {
        self.disallowed.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for loc in &self.disallowed {
            writeln!(
                f,
                "disallowed: state {} arc {}: {}:{}",
                loc.state, loc.position, loc.ilabel, loc.olabel
            )?;
        }
        writeln!(f, "disallowed pairs: {}", self.disallowed.len())?;
        writeln!(f, "wildcards: {}", if self.has_wildcards { "yes" } else { "no" })?;
        write!(
            f,
            "semantic acceptor: {}",
            if self.semantic_acceptor { "yes" } else { "no" }
        )
    }
}

/// Install the stderr log subscriber: DEBUG when verbose, WARN otherwise.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
