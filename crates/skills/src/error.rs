use std::path::PathBuf;

use skillhub_common::FromMessage;

/// Why a single `SKILL.md` candidate was rejected.
///
/// These never abort a scan; discovery logs them and drops the candidate.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing YAML frontmatter: file must start with ---")]
    MissingFrontmatter,
    #[error("incomplete YAML frontmatter: no closing ---")]
    IncompleteFrontmatter,
    #[error("invalid YAML in frontmatter: {0}")]
    MalformedFrontmatter(#[source] serde_yaml::Error),
    #[error("invalid frontmatter field '{field}': {reason}")]
    SchemaViolation { field: &'static str, reason: String },
    #[error(
        "frontmatter name \"{name}\" does not match directory name \"{directory}\"; \
         update the 'name' field in SKILL.md to match the directory name"
    )]
    NameDirectoryMismatch { name: String, directory: String },
}

impl ManifestError {
    pub(crate) fn schema(field: &'static str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Walkdir(#[from] walkdir::Error),
    #[error(transparent)]
    StripPrefix(#[from] std::path::StripPrefixError),
    #[error("skill registry used before initialization")]
    NotInitialized,
    #[error("skill registry is already initialized")]
    AlreadyInitialized,
    #[error("skill \"{name}\" not found. Available skills: {}", available.join(", "))]
    NotFound { name: String, available: Vec<String> },
    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

skillhub_common::impl_context!();
