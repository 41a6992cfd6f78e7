use crate::errors::PromptError;
use crate::selector::SelectedFile;
use crate::utils::{display_path, format_bytes};
use dialoguer::{Confirm, Input, MultiSelect};

/// Collects whatever the CLI flags and config left unspecified.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        InputHandler
    }

    /// Multi-line prompt text; an empty line ends the input once there is
    /// any content.
    pub fn get_prompt(&self) -> Result<String, PromptError> {
        println!("Enter the prompt text (multiple lines, empty line to finish):");

        let mut lines: Vec<String> = Vec::new();
        loop {
            let line: String = Input::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()?;
            if line.is_empty() && !lines.is_empty() {
                break;
            }
            lines.push(line);
        }

        Ok(lines.join("\n"))
    }

    /// Include patterns, one per line; defaults to `*` when none are given.
    pub fn get_file_patterns(&self) -> Result<Vec<String>, PromptError> {
        println!("Enter file patterns (e.g. *.rs, src/**/*.rs; empty line to finish):");
        let mut patterns = self.read_pattern_lines()?;
        if patterns.is_empty() {
            patterns.push("*".to_owned());
        }
        Ok(patterns)
    }

    /// Exclude patterns, one per line; may be empty.
    pub fn get_exclude_patterns(&self) -> Result<Vec<String>, PromptError> {
        println!("Enter exclude patterns (e.g. vendor/*, *_test.rs; empty line to finish):");
        self.read_pattern_lines()
    }

    fn read_pattern_lines(&self) -> Result<Vec<String>, PromptError> {
        let mut lines: Vec<String> = Vec::new();
        loop {
            let line: String = Input::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()?;
            let line = line.trim().to_owned();
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines)
    }

    pub fn confirm_selection(&self, files: &[SelectedFile]) -> Result<bool, PromptError> {
        println!("\nFound {} files:", files.len());
        for (i, file) in files.iter().enumerate() {
            println!(
                "{}. {} ({})",
                i + 1,
                display_path(&file.path),
                format_bytes(file.size)
            );
        }

        Ok(Confirm::new()
            .with_prompt("Include these files?")
            .default(true)
            .interact()?)
    }

    /// Lets the user drop individual files; everything starts selected.
    pub fn select_from_list(
        &self,
        files: Vec<SelectedFile>,
    ) -> Result<Vec<SelectedFile>, PromptError> {
        if files.is_empty() {
            return Ok(files);
        }

        let labels: Vec<String> = files
            .iter()
            .map(|file| format!("{} ({})", display_path(&file.path), format_bytes(file.size)))
            .collect();
        let defaults = vec![true; files.len()];

        let chosen = MultiSelect::new()
            .with_prompt("Select the files to include (space toggles, enter confirms)")
            .items(&labels)
            .defaults(&defaults)
            .interact()?;

        let mut selected = Vec::with_capacity(chosen.len());
        for (i, file) in files.into_iter().enumerate() {
            if chosen.contains(&i) {
                selected.push(file);
            }
        }
        Ok(selected)
    }

    /// Empty input means the clipboard.
    pub fn get_output_path(&self) -> Result<String, PromptError> {
        let path: String = Input::new()
            .with_prompt("Output file path (enter for clipboard)")
            .allow_empty(true)
            .interact_text()?;
        Ok(path.trim().to_owned())
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        InputHandler::new()
    }
}
