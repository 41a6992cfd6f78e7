use clap::Parser;
use codeprep::config::Config;
use codeprep::errors::PromptError;
use codeprep::formatter::{validate_files, BasicPromptFormatter, PromptFormatter};
use codeprep::interactive::InputHandler;
use codeprep::logger::initialize_logger;
use codeprep::output::write_output;
use codeprep::selector::{FileSelector, SelectedFile};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
#[command(name = "codeprep", version)]
#[command(about = "Generate LLM prompts with multiple code files")]
#[command(long_about = "codeprep helps developers quickly generate LLM prompts containing \
multiple code file contents. It supports file selection through patterns, exclusion rules, \
and interactive input.")]
struct CliArgs {
    /// File patterns (can be used multiple times)
    #[arg(short = 'f', long = "files")]
    files: Vec<String>,

    /// Exclude patterns (can be used multiple times)
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Prompt text
    #[arg(short = 'p', long)]
    prompt: Option<String>,

    /// Interactive mode
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Output file path (default: clipboard)
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Config file path
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Show files that would be processed
    #[arg(long)]
    dry_run: bool,

    /// Maximum file size in bytes (default: 1MB)
    #[arg(long, default_value_t = 0)]
    max_size: u64,

    /// Verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    initialize_logger(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: CliArgs) -> Result<(), PromptError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.merge(
        args.files,
        args.exclude,
        args.prompt,
        args.output,
        args.max_size,
    );

    if args.interactive {
        run_interactive(config).await
    } else {
        run_batch(config, args.dry_run, args.verbose).await
    }
}

async fn run_batch(config: Config, dry_run: bool, verbose: bool) -> Result<(), PromptError> {
    let selector = FileSelector::new(
        config.files.clone(),
        config.exclude.clone(),
        config.max_file_size,
    );
    let selected = selector.select_files()?;

    if selected.is_empty() {
        debug!("No files found matching the patterns:");
        for pattern in &config.files {
            debug!("  - {}", pattern);
        }
        return Err(PromptError::NoMatches);
    }

    let valid = validate_files(selected.clone());
    if valid.len() != selected.len() {
        warn!(
            "{} files were skipped (not readable or not regular files)",
            selected.len() - valid.len()
        );
    }
    if valid.is_empty() {
        return Err(PromptError::NoValidFiles);
    }

    if dry_run {
        let formatter = BasicPromptFormatter::new(String::new(), valid, verbose);
        print!("{}", formatter.summary());
        return Ok(());
    }

    generate_output(&config, valid, verbose).await
}

async fn run_interactive(mut config: Config) -> Result<(), PromptError> {
    let handler = InputHandler::new();

    if config.prompt.is_empty() {
        config.prompt = handler.get_prompt()?;
    }
    if config.files.is_empty() {
        config.files = handler.get_file_patterns()?;
    }
    let excludes = handler.get_exclude_patterns()?;
    config.exclude.extend(excludes);
    if config.output.is_empty() {
        config.output = handler.get_output_path()?;
    }

    let selector = FileSelector::new(
        config.files.clone(),
        config.exclude.clone(),
        config.max_file_size,
    );
    let selected = selector.select_files()?;

    if selected.is_empty() {
        eprintln!("No files found matching the patterns");
        return Ok(());
    }

    if !handler.confirm_selection(&selected)? {
        eprintln!("Operation cancelled");
        return Ok(());
    }

    let final_files = handler.select_from_list(selected)?;

    generate_output(&config, final_files, true).await
}

async fn generate_output(
    config: &Config,
    files: Vec<SelectedFile>,
    verbose: bool,
) -> Result<(), PromptError> {
    debug!("Formatting {} files...", files.len());
    let file_count = files.len();

    let formatter = BasicPromptFormatter::new(config.prompt.clone(), files, verbose);
    let formatted = formatter.format().await?;

    write_output(&formatted, &config.output).await?;

    if config.output.is_empty() {
        info!("Prompt generated successfully with {} files", file_count);
    }
    Ok(())
}
