use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const API_KEY_VAR: &str = "VITE_YOUTUBE_API_KEY";
pub const CHANNEL_ID_VAR: &str = "VITE_YOUTUBE_CHANNEL_ID";
pub const CONTACT_FORM_KEY_VAR: &str = "VITE_CONTACT_FORM_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0} is not set in the env file")]
    MissingKey(&'static str),
}

/// Secrets read once from the env file and passed by reference to whatever needs them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub channel_id: String,
    pub contact_form_key: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("channel_id", &self.channel_id)
            .field(
                "contact_form_key",
                &self.contact_form_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Credentials {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_pairs(parse_env_pairs(&content))
    }

    /// Later pairs override earlier ones; blank values count as missing.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut api_key = None;
        let mut channel_id = None;
        let mut contact_form_key = None;
        for (key, value) in pairs {
            let slot = match key.as_str() {
                API_KEY_VAR => &mut api_key,
                CHANNEL_ID_VAR => &mut channel_id,
                CONTACT_FORM_KEY_VAR => &mut contact_form_key,
                _ => continue,
            };
            *slot = Some(value).filter(|v| !v.is_empty());
        }

        Ok(Self {
            api_key: api_key.ok_or(ConfigError::MissingKey(API_KEY_VAR))?,
            channel_id: channel_id.ok_or(ConfigError::MissingKey(CHANNEL_ID_VAR))?,
            contact_form_key,
        })
    }
}

/// `KEY=VALUE` or `KEY:VALUE` lines, split at the first separator.
///
/// A key may not contain `#`, so commented-out assignments are skipped along
/// with any other line that has no separator or an empty key.
pub fn parse_env_pairs(content: &str) -> Vec<(String, String)> {
    // Editors on Windows often save a byte-order mark.
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    content.lines().filter_map(parse_env_line).collect()
}

fn parse_env_line(line: &str) -> Option<(String, String)> {
    let split = line.find(['=', ':'])?;
    let (raw_key, rest) = line.split_at(split);
    if raw_key.is_empty() || raw_key.contains('#') {
        return None;
    }
    let key = raw_key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), rest[1..].trim().to_string()))
}
