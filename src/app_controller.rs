use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::{
    common::path::release_notes_path,
    engine::{
        credential::CredentialStore,
        generator::NotesGenerator,
        instructions,
        model::ReleaseStyle,
        transport::{CompletionTransport, HttpTransport},
    },
    ui::{
        cli::Cli,
        clipboard,
        config::{
            build_generator_config, credential_store, default_style, load_config_file,
            resolve_output_dir,
        },
        output,
        prompts::{InquirePrompter, Prompter, resolve_credential},
    },
};

/// What a successful run produced.
#[derive(Debug)]
pub struct GeneratedNotes {
    pub notes: String,
    pub path: PathBuf,
}

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    if args.clipboard_daemon {
        return clipboard::serve_clipboard_daemon();
    }

    let cfg_file = load_config_file()?;
    let config = build_generator_config(&cfg_file)?;
    let transport = HttpTransport::new(&config).context("Failed to create HTTP client")?;
    let generator = NotesGenerator::new(config, transport);
    let store = credential_store(&args);
    let output_dir = resolve_output_dir(&args, &cfg_file);
    let mut prompter = InquirePrompter;

    output::print_banner();

    let generated = run_flow(
        &mut prompter,
        &store,
        &generator,
        &output_dir,
        default_style(&cfg_file),
    )?;

    if !args.no_clipboard && prompter.confirm_clipboard()? {
        match clipboard::system().copy(&generated.notes) {
            Ok(()) => output::info("Copied to clipboard."),
            Err(e) => {
                log::warn!("clipboard copy failed: {e:#}");
                output::warn(&format!("{e:#}"));
            }
        }
    }

    Ok(())
}

/// Credential, questions, one generation call, then the file write.
pub fn run_flow<P, T>(
    prompter: &mut P,
    store: &CredentialStore,
    generator: &NotesGenerator<T>,
    output_dir: &Path,
    default_style: ReleaseStyle,
) -> Result<GeneratedNotes>
where
    P: Prompter + ?Sized,
    T: CompletionTransport,
{
    let credential = resolve_credential(store, &mut *prompter)?.credential;
    let details = prompter.release_details(default_style)?;
    let request = details.into_request(credential)?;

    let spinner = output::spinner("Generating release notes...");
    let result = generator.generate(&request);
    spinner.finish_and_clear();

    let notes = match result {
        Ok(notes) => notes,
        Err(e) => {
            if e.is_unauthorized() {
                output::warn(&format!(
                    "Your saved API key may be invalid. Delete {} and run again to enter a new one.",
                    store.path().display()
                ));
            }
            return Err(e.into());
        }
    };

    output::print_notes(
        &instructions::title(request.product_name(), request.version()),
        &notes,
    );

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;
    let path = release_notes_path(output_dir, request.product_name(), request.version());
    output::write_to_file(&path, &notes)?;

    Ok(GeneratedNotes { notes, path })
}
