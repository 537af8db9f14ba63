// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Handles server URLs, package paths, and delete-path specifications.

use serde::Deserialize;
use std::path::PathBuf;

use crate::http::BaseUrl;
use crate::types::{DeletePaths, PackageArtifact};

pub fn deserialize_base_url<'de, D>(deserializer: D) -> Result<BaseUrl, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    BaseUrl::parse(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_base_url_option<'de, D>(deserializer: D) -> Result<Option<BaseUrl>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    opt.map(|s| BaseUrl::parse(&s).map_err(serde::de::Error::custom))
        .transpose()
}

pub fn deserialize_artifact<'de, D>(deserializer: D) -> Result<PackageArtifact, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let path = PathBuf::deserialize(deserializer)?;
    PackageArtifact::new(path).map_err(serde::de::Error::custom)
}

/// Parse the `;`/`,` delete-path string. Inactive strings (empty or not
/// starting with `/`) become `None`.
pub fn deserialize_delete_paths<'de, D>(deserializer: D) -> Result<Option<DeletePaths>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(spec) => DeletePaths::parse(&spec).map_err(serde::de::Error::custom),
    }
}
