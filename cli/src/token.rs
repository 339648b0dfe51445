//! Bearer token persisted between CLI invocations.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::CliError;

const DEFAULT_FILE_NAME: &str = ".qrcodes-token";

pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `~/.qrcodes-token`, if a home directory is known.
    pub fn default_location() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(DEFAULT_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank file means "not logged in".
    pub fn load(&self) -> Result<Option<String>, CliError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), CliError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
            }
        }
        fs::write(&self.path, token).map_err(|err| self.io_error(err))?;
        restrict_permissions(&self.path).map_err(|err| self.io_error(err))
    }

    /// Removing an absent file is not an error.
    pub fn clear(&self) -> Result<(), CliError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> CliError {
        CliError::TokenFile { path: self.path.clone(), source }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;
