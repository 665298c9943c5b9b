//! Interactive questions, and the credential-first resolution that sits on top of them.

use anyhow::Result;
use inquire::{
    Confirm, CustomUserError, InquireError, Password, PasswordDisplayMode, Select, Text,
    error::InquireResult, validator::Validation,
};

use crate::engine::{
    credential::CredentialStore,
    error::ValidationError,
    model::{Credential, GenerationRequest, GenerationRequestBuilder, ReleaseStyle},
    validate::{validate_credential, validate_required, validate_version},
};
use crate::ui::output;

/// Answers collected after the credential is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDetails {
    pub product_name: String,
    pub version: String,
    pub style: ReleaseStyle,
    pub change_description: String,
}

impl ReleaseDetails {
    pub fn into_request(self, credential: Credential) -> Result<GenerationRequest, ValidationError> {
        GenerationRequestBuilder::default()
            .product_name(self.product_name)
            .version(self.version)
            .style(self.style)
            .change_description(self.change_description)
            .credential(credential)
            .build()
    }
}

/// Source of user answers. Implementations must only return values that
/// pass the matching validator.
pub trait Prompter {
    fn credential(&mut self) -> Result<Credential>;
    fn release_details(&mut self, default_style: ReleaseStyle) -> Result<ReleaseDetails>;
    fn confirm_clipboard(&mut self) -> Result<bool>;
}

/// Terminal prompts rendered by `inquire`.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn credential(&mut self) -> Result<Credential> {
        let key = Password::new("Enter your OpenAI API key:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .with_validator(credential_format)
            .with_help_message("It will be saved for future runs.")
            .prompt()?;
        Ok(Credential::new(key))
    }

    fn release_details(&mut self, default_style: ReleaseStyle) -> Result<ReleaseDetails> {
        let product_name = Text::new("Enter product name:")
            .with_validator(required("Product name"))
            .prompt()?;

        let version = Text::new("Enter version:")
            .with_validator(version_format)
            .with_help_message("e.g. 1.9.2")
            .prompt()?;

        let start = ReleaseStyle::ALL
            .iter()
            .position(|s| *s == default_style)
            .unwrap_or(0);
        let style = Select::new("Select release notes style:", ReleaseStyle::ALL.to_vec())
            .with_starting_cursor(start)
            .prompt()?;

        let change_description = Text::new("Enter features/fixes (describe the changes):")
            .with_validator(required("Features/fixes"))
            .prompt()?;

        Ok(ReleaseDetails {
            product_name: product_name.trim().to_string(),
            version: version.trim().to_string(),
            style,
            change_description,
        })
    }

    fn confirm_clipboard(&mut self) -> Result<bool> {
        declined_on_cancel(
            Confirm::new("Would you like to copy to clipboard?")
                .with_default(false)
                .prompt(),
        )
    }
}

fn required(field: &'static str) -> impl Fn(&str) -> Result<Validation, CustomUserError> + Clone {
    move |input: &str| Ok(as_validation(validate_required(field, input)))
}

fn version_format(input: &str) -> Result<Validation, CustomUserError> {
    Ok(as_validation(validate_version(input)))
}

/// The notes are already saved when this is asked, so Esc or Ctrl-C means "no".
fn declined_on_cancel(answer: InquireResult<bool>) -> Result<bool> {
    match answer {
        Ok(yes) => Ok(yes),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn credential_format(input: &str) -> Result<Validation, CustomUserError> {
    Ok(as_validation(validate_credential(input)))
}

fn as_validation(res: Result<(), ValidationError>) -> Validation {
    match res {
        Ok(()) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string().into()),
    }
}

/// Where the credential for this run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Cached,
    Entered,
    /// Entered, but the file write failed; valid for this run only.
    EnteredUnsaved,
}

#[derive(Debug)]
pub struct ResolvedCredential {
    pub credential: Credential,
    pub source: CredentialSource,
}

/// Prefers the cached credential; otherwise asks once and tries to persist the answer.
pub fn resolve_credential<P: Prompter + ?Sized>(
    store: &CredentialStore,
    prompter: &mut P,
) -> Result<ResolvedCredential> {
    if let Some(cached) = store.load() {
        match validate_credential(cached.expose()) {
            Ok(()) => {
                log::debug!("using cached credential from {}", store.path().display());
                return Ok(ResolvedCredential {
                    credential: cached,
                    source: CredentialSource::Cached,
                });
            }
            Err(e) => output::warn(&format!("Ignoring cached API key: {e}")),
        }
    }

    let credential = prompter.credential()?;
    validate_credential(credential.expose())?;

    let source = match store.save(&credential) {
        Ok(()) => CredentialSource::Entered,
        Err(w) => {
            log::warn!("{w}");
            output::warn(&format!("{w}. Continuing without saving it."));
            CredentialSource::EnteredUnsaved
        }
    };

    Ok(ResolvedCredential { credential, source })
}
