use serde::de::DeserializeOwned;
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::config::loader::decode;
use crate::config::{load_with_source, ArrayConfig, SectionedConfig, SubtableConfig};
use crate::errors::{ConfigError, ConfigResult};
use crate::render::Renderable;
use crate::value::ConfigValue;

/// Destination shapes a file can be decoded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    ArrayOfTables,
    Subtables,
    Sectioned,
    Dynamic,
}

/// Shapes with a typed record, in the order fixtures are inspected
pub const TYPED_SHAPES: [Shape; 3] = [Shape::ArrayOfTables, Shape::Subtables, Shape::Sectioned];

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::ArrayOfTables => "array",
            Shape::Subtables => "subtables",
            Shape::Sectioned => "sections",
            Shape::Dynamic => "dynamic",
        }
    }

    /// Default fixture file for the shape, relative to the config directory
    pub fn fixture(&self) -> Option<&'static str> {
        match self {
            Shape::ArrayOfTables => Some("test-array-of-tables.toml"),
            Shape::Subtables => Some("test-subtables.toml"),
            Shape::Sectioned => Some("test-sections.toml"),
            Shape::Dynamic => None,
        }
    }

    pub fn inspect<P, W>(&self, path: P, out: &mut W, options: InspectOptions) -> ConfigResult<()>
    where
        P: AsRef<Path>,
        W: Write,
    {
        match self {
            Shape::ArrayOfTables => inspect::<ArrayConfig, _, _>(path, out, options),
            Shape::Subtables => inspect::<SubtableConfig, _, _>(path, out, options),
            Shape::Sectioned => inspect::<SectionedConfig, _, _>(path, out, options),
            Shape::Dynamic => inspect::<toml::Table, _, _>(path, out, options),
        }
    }
}

impl FromStr for Shape {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "array" | "array-of-tables" => Ok(Shape::ArrayOfTables),
            "subtables" | "subtable" => Ok(Shape::Subtables),
            "sections" | "sectioned" => Ok(Shape::Sectioned),
            "dynamic" | "value" => Ok(Shape::Dynamic),
            _ => Err(ConfigError::UnsupportedShape {
                shape: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extra sections of the inspection report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    /// Also print the shape-agnostic decoded value
    pub dump: bool,
    /// Render keyed collections in key order
    pub sorted: bool,
}

/// Loads `path` as `T` and writes the inspection report to `out`.
///
/// Nothing is written unless the whole record decodes.
pub fn inspect<T, P, W>(path: P, out: &mut W, options: InspectOptions) -> ConfigResult<()>
where
    T: DeserializeOwned + Renderable,
    P: AsRef<Path>,
    W: Write,
{
    let path = path.as_ref();
    let loaded = load_with_source::<T, _>(path)?;
    let dump = if options.dump {
        let origin = path.display().to_string();
        let table = decode::<toml::Table>(&loaded.content, &origin)?;
        Some(ConfigValue::from(table))
    } else {
        None
    };
    info!(
        "[inspect] '{}' decoded as {}",
        path.display(),
        std::any::type_name::<T>()
    );

    write!(out, "toml-file content:\n----\n{}\n----\n", loaded.content)?;
    if let Some(value) = dump {
        write!(out, "toml-value content:\n----\n{}----\n", value.render())?;
    }
    let rendered = if options.sorted {
        loaded.record.render_sorted()
    } else {
        loaded.record.render()
    };
    write!(
        out,
        "toml-struct type:\n----\n{}\n----\nstruct content:\n----\n{}----\n",
        std::any::type_name::<T>(),
        rendered
    )?;
    Ok(())
}

/// Inspects every typed shape against its fixture under `config_dir`,
/// stopping at the first failure.
pub fn inspect_fixtures<P, W>(
    config_dir: P,
    out: &mut W,
    options: InspectOptions,
) -> ConfigResult<()>
where
    P: AsRef<Path>,
    W: Write,
{
    for shape in TYPED_SHAPES {
        if let Some(fixture) = shape.fixture() {
            shape.inspect(config_dir.as_ref().join(fixture), out, options)?;
        }
    }
    Ok(())
}
