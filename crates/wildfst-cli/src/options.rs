// Command-line options and pass configuration loading.

use std::path::{Path, PathBuf};

use wildfst_core::{Label, PassConfig, RuleLabels, WildcardLabels};

use crate::CliError;

/// Environment variable naming a JSON pass configuration file.
pub const CONFIG_ENV: &str = "WILDFST_CONFIG";

/// Options shared by the CLI tools.
///
/// Label flags override the corresponding values from the configuration
/// file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub other_id: Option<Label>,
    pub other_nonid: Option<Label>,
    pub alphabet: Option<Vec<Label>>,
    pub separator: Option<Label>,
    pub hard_epsilon: Option<Label>,
    pub verbose: bool,
    pub help: bool,
    /// Arguments that are not options, in order.
    pub positional: Vec<String>,
}

/// Parse command-line arguments (without the program name).
///
/// Value options accept both `--name VALUE` and `--name=VALUE`.
pub fn parse_options(args: &[String]) -> Result<Options, CliError> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let (name, inline) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
            _ => (arg.as_str(), None),
        };
        let mut value = || -> Result<String, CliError> {
            match &inline {
                Some(v) => Ok(v.clone()),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| CliError::Usage(format!("{name} requires a value"))),
            }
        };

        match name {
            "-c" | "--config" => opts.config_path = Some(PathBuf::from(value()?)),
            "--other-id" => opts.other_id = Some(parse_label(name, &value()?)?),
            "--other-nonid" => opts.other_nonid = Some(parse_label(name, &value()?)?),
            "--separator" => opts.separator = Some(parse_label(name, &value()?)?),
            "--hard-epsilon" => opts.hard_epsilon = Some(parse_label(name, &value()?)?),
            "--alphabet" => {
                let list = value()?;
                let labels = list
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| parse_label(name, s))
                    .collect::<Result<Vec<_>, _>>()?;
                opts.alphabet = Some(labels);
            }
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => opts.help = true,
            _ if name.starts_with('-') && name.len() > 1 => {
                return Err(CliError::Usage(format!("unknown option {name}")));
            }
            _ => opts.positional.push(arg.clone()),
        }
    }

    Ok(opts)
}

fn parse_label(option: &str, text: &str) -> Result<Label, CliError> {
    text.parse()
        .map_err(|_| CliError::Usage(format!("{option}: invalid label {text:?}")))
}

impl Options {
    /// Load the pass configuration: `--config`, else `WILDFST_CONFIG`, else
    /// flags only. Flags override file values. The result is validated.
    pub fn load_config(&self) -> Result<PassConfig, CliError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        self.resolve_config(env_path.as_deref())
    }

    /// [`load_config`](Self::load_config) with the environment value passed
    /// in explicitly.
    pub fn resolve_config(&self, env_path: Option<&Path>) -> Result<PassConfig, CliError> {
        let path = self.config_path.as_deref().or(env_path);
        let file = match path {
            Some(path) => Some(read_config_file(path)?),
            None => None,
        };

        let other_id = self.other_id.or(file.as_ref().map(|c| c.wildcards.other_id));
        let other_nonid = self
            .other_nonid
            .or(file.as_ref().map(|c| c.wildcards.other_nonid));
        let (Some(other_id), Some(other_nonid)) = (other_id, other_nonid) else {
            return Err(CliError::Usage(
                "wildcard labels not configured: pass --other-id and --other-nonid or a config file"
                    .to_string(),
            ));
        };

        let file_rule = file.as_ref().and_then(|c| c.rule);
        let separator = self.separator.or(file_rule.map(|r| r.separator));
        let hard_epsilon = self.hard_epsilon.or(file_rule.map(|r| r.hard_epsilon));
        let rule = match (separator, hard_epsilon) {
            (Some(separator), Some(hard_epsilon)) => {
                Some(RuleLabels::new_unchecked(separator, hard_epsilon))
            }
            (None, None) => None,
            _ => {
                return Err(CliError::Usage(
                    "--separator and --hard-epsilon must be given together".to_string(),
                ));
            }
        };

        let alphabet = match &self.alphabet {
            Some(labels) => labels.clone(),
            None => file.map(|c| c.alphabet).unwrap_or_default(),
        };

        let config = PassConfig {
            wildcards: WildcardLabels::new_unchecked(other_id, other_nonid),
            rule,
            alphabet,
        };
        config.validate()?;
        tracing::debug!(?config, "resolved pass configuration");
        Ok(config)
    }
}

fn read_config_file(path: &Path) -> Result<PassConfig, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wildfst-cli-{}-{name}.json",
            std::process::id()
        ));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn parse_all_flags() {
        let opts = parse_options(&args(&[
            "expand",
            "--other-id",
            "100",
            "--other-nonid=101",
            "--alphabet",
            "3, 4,5",
            "--separator",
            "200",
            "--hard-epsilon=201",
            "-v",
        ]))
        .unwrap();
        assert_eq!(opts.positional, vec!["expand".to_string()]);
        assert_eq!(opts.other_id, Some(100));
        assert_eq!(opts.other_nonid, Some(101));
        assert_eq!(opts.alphabet, Some(vec![3, 4, 5]));
        assert_eq!(opts.separator, Some(200));
        assert_eq!(opts.hard_epsilon, Some(201));
        assert!(opts.verbose);
        assert!(!opts.help);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            parse_options(&args(&["--other-id"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_options(&args(&["--other-id", "abc"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_options(&args(&["--frobnicate"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn flags_only_config() {
        let opts = parse_options(&args(&["--other-id", "100", "--other-nonid", "101"])).unwrap();
        let config = opts.resolve_config(None).unwrap();
        assert_eq!(config.wildcards, WildcardLabels::new_unchecked(100, 101));
        assert_eq!(config.rule, None);
        assert!(config.alphabet.is_empty());
    }

    #[test]
    fn missing_wildcards_is_an_error() {
        let opts = parse_options(&args(&["--other-id", "100"])).unwrap();
        assert!(matches!(opts.resolve_config(None), Err(CliError::Usage(_))));
    }

    #[test]
    fn invalid_labels_are_rejected() {
        let opts = parse_options(&args(&["--other-id", "100", "--other-nonid", "100"])).unwrap();
        assert!(matches!(opts.resolve_config(None), Err(CliError::Label(_))));

        let opts = parse_options(&args(&[
            "--other-id",
            "100",
            "--other-nonid",
            "101",
            "--separator",
            "200",
        ]))
        .unwrap();
        assert!(matches!(opts.resolve_config(None), Err(CliError::Usage(_))));
    }

    #[test]
    fn flags_override_file() {
        let path = temp_config(
            "override",
            r#"{ "wildcards": { "other_id": 100, "other_nonid": 101 },
                 "rule": { "separator": 200, "hard_epsilon": 201 },
                 "alphabet": [1, 2] }"#,
        );
        let opts = parse_options(&args(&["--alphabet", "7", "--separator", "300"])).unwrap();
        let config = opts.resolve_config(Some(&path)).unwrap();
        assert_eq!(config.wildcards, WildcardLabels::new_unchecked(100, 101));
        assert_eq!(config.rule, Some(RuleLabels::new_unchecked(300, 201)));
        assert_eq!(config.alphabet, vec![7]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn explicit_config_wins_over_environment() {
        let path = temp_config(
            "explicit",
            r#"{ "wildcards": { "other_id": 10, "other_nonid": 11 } }"#,
        );
        let opts = Options {
            config_path: Some(path.clone()),
            ..Options::default()
        };
        let config = opts
            .resolve_config(Some(Path::new("/nonexistent/wildfst.json")))
            .unwrap();
        assert_eq!(config.wildcards.other_id, 10);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn unreadable_and_malformed_files() {
        let opts = Options::default();
        assert!(matches!(
            opts.resolve_config(Some(Path::new("/nonexistent/wildfst.json"))),
            Err(CliError::ConfigRead { .. })
        ));
        let path = temp_config("malformed", "{ not json");
        assert!(matches!(
            opts.resolve_config(Some(&path)),
            Err(CliError::ConfigParse { .. })
        ));
        std::fs::remove_file(path).unwrap();
    }
}
