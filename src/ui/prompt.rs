//! Interactive password prompts.
//!
//! Encryption prompts twice (entry + confirmation) since a typo would be
//! unrecoverable; decryption prompts once, since a wrong guess is simply a
//! failed attempt the user can retry. An empty encryption password is valid
//! input and means "no encryption", per the CLI contract.

use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::config::PASSWORD_MIN_LENGTH;
use crate::error::{ShumzuError, ShumzuResult};

/// Prompts for an encryption password with confirmation. An empty entry
/// (pressing enter with no characters) is accepted and means "no password";
/// any non-empty entry must meet [`PASSWORD_MIN_LENGTH`].
pub fn prompt_encryption_password() -> ShumzuResult<String> {
    let theme = ColorfulTheme::default();

    let password: String = Password::with_theme(&theme)
        .with_prompt("Password (leave empty for no encryption)")
        .allow_empty_password(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() || input.len() >= PASSWORD_MIN_LENGTH {
                Ok(())
            } else {
                Err(format!("password must be at least {PASSWORD_MIN_LENGTH} characters, or empty for no encryption"))
            }
        })
        .interact()
        .map_err(|e| ShumzuError::Io(std::io::Error::other(e)))?;

    if password.is_empty() {
        return Ok(password);
    }

    let confirmation: String = Password::with_theme(&theme)
        .with_prompt("Confirm password")
        .interact()
        .map_err(|e| ShumzuError::Io(std::io::Error::other(e)))?;

    if password != confirmation {
        return Err(ShumzuError::Io(std::io::Error::other("passwords did not match")));
    }

    Ok(password)
}

/// Prompts once for a decryption password, used after the decode pipeline
/// detects that at least one block looks encrypted.
pub fn prompt_decryption_password() -> ShumzuResult<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()
        .map_err(|e| ShumzuError::Io(std::io::Error::other(e)))
}
