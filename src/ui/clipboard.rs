// src/ui/clipboard.rs

use anyhow::Result;

/// Somewhere the generated notes can be copied to.
pub trait ClipboardSink {
    fn copy(&self, text: &str) -> Result<()>;
}

/// The best sink this build supports.
pub fn system() -> Box<dyn ClipboardSink> {
    #[cfg(feature = "clipboard")]
    {
        Box::new(SystemClipboard)
    }
    #[cfg(not(feature = "clipboard"))]
    {
        Box::new(NoClipboard)
    }
}

/// Used when the binary was built without the `clipboard` feature.
pub struct NoClipboard;

impl ClipboardSink for NoClipboard {
    fn copy(&self, _text: &str) -> Result<()> {
        anyhow::bail!(
            "Clipboard support is not compiled in. Rebuild with `--features clipboard`."
        )
    }
}

#[cfg(feature = "clipboard")]
pub use system_clipboard::{SystemClipboard, serve_clipboard_daemon};

#[cfg(feature = "clipboard")]
mod system_clipboard {
    use anyhow::{Context, Result};
    use arboard::Clipboard;
    use std::io::{self, Read};

    use super::ClipboardSink;

    /// Copies via `arboard`, using a daemon on Linux.
    pub struct SystemClipboard;

    impl ClipboardSink for SystemClipboard {
        fn copy(&self, text: &str) -> Result<()> {
            #[cfg(target_os = "linux")]
            {
                spawn_clipboard_daemon(text)
            }

            #[cfg(not(target_os = "linux"))]
            {
                let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
                clipboard
                    .set_text(text.to_string())
                    .context("Failed to copy to clipboard")
            }
        }
    }

    // X11/Wayland selections die with their owner, so a detached copy of
    // this binary holds the text after the main process exits.
    #[cfg(target_os = "linux")]
    fn spawn_clipboard_daemon(text: &str) -> Result<()> {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let mut child = Command::new(std::env::current_exe()?)
            .arg("--clipboard-daemon")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to spawn clipboard daemon")?;

        let mut stdin = child
            .stdin
            .take()
            .context("Clipboard daemon has no stdin")?;
        stdin
            .write_all(text.as_bytes())
            .context("Failed to hand text to clipboard daemon")?;
        Ok(())
    }

    /// Entry point of the hidden `--clipboard-daemon` mode.
    pub fn serve_clipboard_daemon() -> Result<()> {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;

        let mut clipboard =
            Clipboard::new().context("Failed to initialize clipboard in daemon")?;
        clipboard
            .set_text(buffer)
            .context("Failed to set text in clipboard daemon")?;

        // Keep the daemon alive long enough for the content to be pasted.
        std::thread::sleep(std::time::Duration::from_secs(60));

        Ok(())
    }
}

#[cfg(not(feature = "clipboard"))]
pub fn serve_clipboard_daemon() -> Result<()> {
    anyhow::bail!("Clipboard support is not compiled in.")
}
