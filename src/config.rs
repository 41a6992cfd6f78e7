use crate::errors::PromptError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Run configuration, merged from an optional YAML file and CLI flags.
/// An empty `output` means the clipboard.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub files: Vec<String>,
    pub exclude: Vec<String>,
    pub prompt: String,
    pub max_file_size: u64,
    pub output: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: Vec::new(),
            exclude: vec![
                "vendor/**".to_owned(),
                "node_modules/**".to_owned(),
                ".git/**".to_owned(),
            ],
            prompt: String::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            output: String::new(),
        }
    }
}

impl Config {
    /// Loads a YAML config. A missing file yields the defaults; any other
    /// read failure or a parse failure is fatal.
    pub fn load(path: &Path) -> Result<Config, PromptError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file {} not found, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(PromptError::ConfigError(format!(
                    "failed to read config file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            PromptError::ConfigError(format!(
                "failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Merges CLI flags in: pattern lists append, scalars override when set.
    pub fn merge(
        &mut self,
        files: Vec<String>,
        exclude: Vec<String>,
        prompt: Option<String>,
        output: Option<String>,
        max_file_size: u64,
    ) {
        self.files.extend(files);
        self.exclude.extend(exclude);
        if let Some(prompt) = prompt {
            if !prompt.is_empty() {
                self.prompt = prompt;
            }
        }
        if let Some(output) = output {
            if !output.is_empty() {
                self.output = output;
            }
        }
        if max_file_size > 0 {
            self.max_file_size = max_file_size;
        }
    }
}
