use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use inquire::InquireError;

#[cfg(feature = "colors")]
use colored::Colorize;

pub fn print_banner() {
    #[cfg(feature = "colors")]
    println!("{}", "\n🚀 Release Notes Generator\n".blue().bold());
    #[cfg(not(feature = "colors"))]
    println!("\n🚀 Release Notes Generator\n");
}

/// Spinner shown while the single request is in flight. Hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub fn print_notes(title: &str, notes: &str) {
    #[cfg(feature = "colors")]
    println!("{}", format!("--- Release Notes: {title} ---").green().bold());
    #[cfg(not(feature = "colors"))]
    println!("--- Release Notes: {title} ---");
    println!("{notes}");
}

/// Writes the notes to `output_path` and reports where they went.
pub fn write_to_file(output_path: &Path, rendered: &str) -> Result<()> {
    let file = std::fs::File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write!(writer, "{rendered}")?;
    writer.flush()?;

    #[cfg(feature = "colors")]
    println!(
        "\n{}{}{} {}",
        "[".bold().white(),
        "✓".bold().green(),
        "]".bold().white(),
        format!("Saved to: {}", output_path.display()).green()
    );

    #[cfg(not(feature = "colors"))]
    println!("\n[✓] Saved to: {}", output_path.display());

    Ok(())
}

pub fn info(msg: &str) {
    #[cfg(feature = "colors")]
    println!("{}", format!("[i] {msg}").blue());
    #[cfg(not(feature = "colors"))]
    println!("[i] {msg}");
}

pub fn warn(msg: &str) {
    #[cfg(feature = "colors")]
    eprintln!("{}", format!("[!] {msg}").yellow());
    #[cfg(not(feature = "colors"))]
    eprintln!("[!] {msg}");
}

/// Final report for an error that ends the run.
pub fn print_error(err: &anyhow::Error) {
    let msg = match err.downcast_ref::<InquireError>() {
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            "Cancelled.".to_string()
        }
        _ => format!("❌ Error: {err:#}"),
    };

    #[cfg(feature = "colors")]
    eprintln!("\n{}", msg.red());
    #[cfg(not(feature = "colors"))]
    eprintln!("\n{msg}");
}
