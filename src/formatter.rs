use crate::errors::PromptError;
use crate::selector::SelectedFile;
use crate::utils::{display_path, format_bytes};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::fs as async_fs;
use tracing::{debug, info, trace, warn};

const PROMPT_HEADER: &str = "=== User Prompt ===";
const FILES_BEGIN: &str = "=== Begin File Contents ===";
const FILES_END: &str = "=== End File Contents ===";
const DEFAULT_LEAD_PROMPT: &str = "Please analyze the following code files.";
const DEFAULT_TRAIL_PROMPT: &str = "Please analyze the code files above.";

#[async_trait]
pub trait PromptFormatter {
    async fn format(&self) -> Result<String, PromptError>;
}

pub struct BasicPromptFormatter {
    prompt: String,
    files: Vec<SelectedFile>,
    verbose: bool,
}

impl BasicPromptFormatter {
    pub fn new(prompt: String, files: Vec<SelectedFile>, verbose: bool) -> Self {
        BasicPromptFormatter {
            prompt,
            files,
            verbose,
        }
    }

    /// Dry-run listing: numbered paths with sizes, totals, and the prompt.
    pub fn summary(&self) -> String {
        let mut result = String::from("Files to be processed:\n");

        let mut total_size = 0u64;
        for (i, file) in self.files.iter().enumerate() {
            result.push_str(&format!(
                "{}. {} ({})\n",
                i + 1,
                file.path.display(),
                format_bytes(file.size)
            ));
            total_size += file.size;
        }

        result.push_str(&format!(
            "\nTotal: {} files, {}\n",
            self.files.len(),
            format_bytes(total_size)
        ));

        if !self.prompt.is_empty() {
            result.push_str(&format!("\nPrompt: {}\n", self.prompt));
        }

        result
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.verbose && self.files.len() > 1 {
            let bar = ProgressBar::new(self.files.len() as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:50}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█░"),
            );
            bar.set_message("Processing files...");
            bar
        } else {
            ProgressBar::hidden()
        }
    }
}

#[async_trait]
impl PromptFormatter for BasicPromptFormatter {
    /// Assembles the prompt block: the user prompt, every readable non-empty
    /// file wrapped in a labeled header, and the prompt again at the end.
    /// Unreadable, non-UTF-8, and whitespace-only files are skipped with a
    /// warning.
    async fn format(&self) -> Result<String, PromptError> {
        let mut result = String::new();

        result.push_str(PROMPT_HEADER);
        result.push('\n');
        if self.prompt.is_empty() {
            result.push_str(DEFAULT_LEAD_PROMPT);
        } else {
            result.push_str(&self.prompt);
        }
        result.push_str("\n\n");

        result.push_str(FILES_BEGIN);
        result.push('\n');

        let bar = self.progress_bar();
        let mut total_size = 0u64;
        let mut processed_files = 0usize;

        for file in &self.files {
            bar.inc(1);

            let content = match async_fs::read_to_string(&file.path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Failed to read file {}: {}", file.path.display(), e);
                    continue;
                }
            };

            if content.trim().is_empty() {
                warn!("Skipping empty file: {}", file.path.display());
                continue;
            }

            trace!("Formatted content for file: {}", file.path.display());
            result.push_str(&format!("--- File: {} ---\n", display_path(&file.path)));
            result.push_str(&content);
            if !content.ends_with('\n') {
                result.push('\n');
            }
            result.push('\n');

            total_size += file.size;
            processed_files += 1;
        }

        bar.finish_and_clear();

        result.push_str(FILES_END);
        result.push_str("\n\n");

        result.push_str(PROMPT_HEADER);
        result.push('\n');
        if self.prompt.is_empty() {
            result.push_str(DEFAULT_TRAIL_PROMPT);
        } else {
            result.push_str(&self.prompt);
        }
        result.push('\n');

        info!(
            "Processed {} files, total size: {}",
            processed_files,
            format_bytes(total_size)
        );

        Ok(result)
    }
}

pub async fn format_prompt(
    prompt: String,
    files: Vec<SelectedFile>,
    verbose: bool,
) -> Result<String, PromptError> {
    let formatter = BasicPromptFormatter::new(prompt, files, verbose);
    formatter.format().await
}

/// Drops entries that stopped being readable regular files since selection.
pub fn validate_files(files: Vec<SelectedFile>) -> Vec<SelectedFile> {
    files
        .into_iter()
        .filter(|file| {
            let still_regular = std::fs::metadata(&file.path)
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !still_regular {
                debug!("Dropping non-regular file: {}", file.path.display());
                return false;
            }
            match std::fs::File::open(&file.path) {
                Ok(_) => true,
                Err(e) => {
                    debug!("Dropping unreadable file {}: {}", file.path.display(), e);
                    false
                }
            }
        })
        .collect()
}
