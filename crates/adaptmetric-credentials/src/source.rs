use std::path::PathBuf;

use crate::handle::CredentialSourceName;

/// One candidate credential source in the priority chain.
///
/// `load` returns the raw payload if the source is present at all; whether
/// that payload is well-formed is the resolver's call. Implementations must
/// not log payload contents.
pub trait CredentialSource: Send + Sync {
    fn name(&self) -> CredentialSourceName;

    fn load(&self) -> Option<String>;
}

/// Credential payload in an environment variable.
pub struct EnvSource {
    name: CredentialSourceName,
    var: &'static str,
}

impl EnvSource {
    pub fn new(name: CredentialSourceName, var: &'static str) -> Self {
        Self { name, var }
    }
}

impl CredentialSource for EnvSource {
    fn name(&self) -> CredentialSourceName {
        self.name
    }

    fn load(&self) -> Option<String> {
        std::env::var(self.var).ok().filter(|v| !v.is_empty())
    }
}

/// Credential payload in a file on disk.
pub struct FileSource {
    name: CredentialSourceName,
    path: PathBuf,
}

impl FileSource {
    pub fn new(name: CredentialSourceName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }
}

impl CredentialSource for FileSource {
    fn name(&self) -> CredentialSourceName {
        self.name
    }

    fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(err) => {
                tracing::warn!(
                    source = %self.name,
                    path = %self.path.display(),
                    error = %err,
                    "failed to read credential file; trying next source"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{{\"client_email\":\"a@b\"}}").unwrap();

        let source = FileSource::new(CredentialSourceName::ProjectFile, &path);
        assert_eq!(source.load().unwrap(), "{\"client_email\":\"a@b\"}");
    }

    #[test]
    fn file_source_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(
            CredentialSourceName::HomeFile,
            dir.path().join("missing.json"),
        );
        assert!(source.load().is_none());
    }
}
