//! Format list served at `/data/formats.json`

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{decode, to_id};

/// Entry of the raw format list.
///
/// Section headers carry only `section`. Anything with a `name` is a
/// format, whether or not it also names its section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFormatFields")]
pub struct RawFormat {
    pub name: Option<String>,
    pub section: Option<String>,
}

impl RawFormat {
    pub fn format(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            section: None,
        }
    }

    pub fn section(section: impl Into<String>) -> Self {
        Self {
            name: None,
            section: Some(section.into()),
        }
    }
}

#[derive(Deserialize)]
struct RawFormatFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    section: Option<String>,
}

impl TryFrom<RawFormatFields> for RawFormat {
    type Error = String;

    fn try_from(raw: RawFormatFields) -> Result<Self, Self::Error> {
        if raw.name.is_none() && raw.section.is_none() {
            return Err("format entry needs a name or a section".to_string());
        }
        Ok(Self {
            name: raw.name,
            section: raw.section,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub name: String,
}

/// Formats keyed by the id of their display name
pub type FormatCatalog = HashMap<String, Format>;

/// Drop section headers and key the remaining formats by id
pub fn build_format_catalog(raw: Vec<RawFormat>) -> FormatCatalog {
    raw.into_iter()
        .filter_map(|entry| entry.name)
        .map(|name| (to_id(&name), Format { name }))
        .collect()
}

/// Decode the raw format list and build the catalog in one step
pub fn parse_format_catalog(body: &[u8]) -> Result<FormatCatalog> {
    let raw: Vec<RawFormat> = decode(body)?;
    Ok(build_format_catalog(raw))
}
