use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::errors::{ConfigError, ConfigResult};

/// Origin reported for content that did not come from a file
pub const INLINE_ORIGIN: &str = "<inline>";

/// A decoded record together with the raw text it was decoded from
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub content: String,
    pub record: T,
}

/// Loads a record of shape `T` from a TOML file
pub fn load<T, P>(path: P) -> ConfigResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    load_with_source(path).map(|loaded| loaded.record)
}

/// Loads a record of shape `T` and keeps the file content alongside it.
///
/// The file is opened once and closed before this returns, on success and
/// on every error path.
pub fn load_with_source<T, P>(path: P) -> ConfigResult<Loaded<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let origin = path.display().to_string();
    let content = read_file(path, &origin)?;

    let record = decode(&content, &origin)?;
    debug!(
        "[config] decoded '{}' into {}",
        origin,
        std::any::type_name::<T>()
    );
    Ok(Loaded { content, record })
}

/// Decodes a record of shape `T` from TOML text
pub fn parse<T: DeserializeOwned>(content: &str) -> ConfigResult<T> {
    decode(content, INLINE_ORIGIN)
}

fn read_file(path: &Path, origin: &str) -> ConfigResult<String> {
    debug!("[config] opening '{}'", origin);
    let mut file = File::open(path).map_err(|source| ConfigError::OpenError {
        path: origin.to_string(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content).map_err(|source| ConfigError::ReadError {
        path: origin.to_string(),
        source,
    })?;
    debug!("[config] read {} byte(s) from '{}'", content.len(), origin);
    Ok(content)
}

/// Decodes TOML text, reporting failures against `origin`
pub(crate) fn decode<T: DeserializeOwned>(content: &str, origin: &str) -> ConfigResult<T> {
    toml::from_str(content).map_err(|source| ConfigError::DecodeError {
        origin: origin.to_string(),
        source,
    })
}
