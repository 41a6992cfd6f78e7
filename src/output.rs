use crate::errors::PromptError;
use arboard::Clipboard;
use tokio::fs as async_fs;
use tracing::{debug, info, warn};

/// Written instead of the clipboard when no clipboard is available.
pub const CLIPBOARD_FALLBACK_FILE: &str = "prompt.txt";

fn copy_to_clipboard(text: &str) -> Result<(), PromptError> {
    debug!("Initializing clipboard");
    let mut clipboard =
        Clipboard::new().map_err(|e| PromptError::ClipboardInitError(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| PromptError::ClipboardWriteError(e.to_string()))?;
    Ok(())
}

async fn write_to_file(text: &str, path: &str) -> Result<(), PromptError> {
    async_fs::write(path, text)
        .await
        .map_err(|e| PromptError::IoError(format!("failed to write output file {}: {}", path, e)))?;
    info!("Content written to file: {}", path);
    Ok(())
}

/// Delivers the formatted text: to the clipboard when `output` is empty,
/// otherwise to the named file. A clipboard failure falls back to
/// `prompt.txt` rather than losing the prompt.
pub async fn write_output(text: &str, output: &str) -> Result<(), PromptError> {
    if output.is_empty() {
        match copy_to_clipboard(text) {
            Ok(()) => {
                info!("Content copied to clipboard successfully");
                Ok(())
            }
            Err(e) => {
                warn!(
                    "Failed to copy to clipboard: {}. Writing to file '{}' instead",
                    e, CLIPBOARD_FALLBACK_FILE
                );
                write_to_file(text, CLIPBOARD_FALLBACK_FILE).await
            }
        }
    } else {
        write_to_file(text, output).await
    }
}
