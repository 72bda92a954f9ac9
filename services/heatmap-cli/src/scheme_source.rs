//! Resolution of the `--scheme` argument.

use std::path::PathBuf;

use anyhow::{Context, Result};
use heatmap_common::SchemeSpec;

/// Where a color scheme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeSource {
    /// One of the schemes compiled into the program.
    Builtin(String),
    /// A JSON or YAML scheme file.
    File(PathBuf),
}

impl SchemeSource {
    /// Built-in names win over files of the same name.
    pub fn parse(value: &str) -> Self {
        if SchemeSpec::builtin(value).is_some() {
            SchemeSource::Builtin(value.to_string())
        } else {
            SchemeSource::File(PathBuf::from(value))
        }
    }

    /// Load and validate the scheme.
    pub fn load(&self) -> Result<SchemeSpec> {
        let spec = match self {
            SchemeSource::Builtin(name) => SchemeSpec::builtin(name)
                .with_context(|| format!("Unknown built-in scheme '{}'", name))?,
            SchemeSource::File(path) => SchemeSpec::from_file(path)
                .with_context(|| format!("Failed to load scheme file {}", path.display()))?,
        };

        spec.validate()
            .with_context(|| format!("Scheme '{}' is not usable", spec.name))?;
        Ok(spec)
    }
}

impl std::str::FromStr for SchemeSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
