//! `.env` persistence for the generated site.

use std::fs;
use std::path::Path;

use minijinja::context;

use crate::domain::AppError;
use crate::ports::TurnstileCredential;
use crate::services::fragments::FragmentRenderer;

/// Write the site's environment file.
///
/// The API endpoint and the two key placeholders are always present; the
/// widget fields carry the provisioned credential or stay empty so the file
/// is well-formed either way.
pub fn write_env_file(
    dir: &Path,
    credential: Option<&TurnstileCredential>,
    fragments: &FragmentRenderer,
) -> Result<(), AppError> {
    let (sitekey, secret) = match credential {
        Some(credential) => (credential.sitekey.as_str(), credential.secret.as_str()),
        None => ("", ""),
    };

    let content = fragments.render("env_file", context! { sitekey => sitekey, secret => secret })?;
    fs::write(dir.join(".env"), content)?;
    Ok(())
}
