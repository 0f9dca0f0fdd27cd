//! Shape-agnostic view of a decoded configuration file.
//!
//! Used to show what the decoder actually produced before the content is
//! bound to a typed record.

use std::collections::BTreeMap;
use std::fmt::{self, Write};

use crate::render::Renderable;

/// A decoded TOML value of unknown shape
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Offset/local date-times, kept in their TOML spelling
    Datetime(String),
    Sequence(Vec<ConfigValue>),
    Mapping(BTreeMap<String, ConfigValue>),
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => ConfigValue::String(s),
            toml::Value::Integer(i) => ConfigValue::Integer(i),
            toml::Value::Float(f) => ConfigValue::Float(f),
            toml::Value::Boolean(b) => ConfigValue::Boolean(b),
            toml::Value::Datetime(d) => ConfigValue::Datetime(d.to_string()),
            toml::Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            toml::Value::Table(table) => ConfigValue::Mapping(
                table.into_iter().map(|(k, v)| (k, ConfigValue::from(v))).collect(),
            ),
        }
    }
}

impl From<toml::Table> for ConfigValue {
    fn from(table: toml::Table) -> Self {
        ConfigValue::from(toml::Value::Table(table))
    }
}

impl ConfigValue {
    /// Short type label used in the dump
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Datetime(_) => "datetime",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Mapping(_) => "mapping",
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        match self {
            ConfigValue::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    fn write_indented(&self, out: &mut dyn Write, depth: usize) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(out, "{:?}", s),
            ConfigValue::Integer(i) => write!(out, "{}", i),
            ConfigValue::Float(f) => write!(out, "{:?}", f),
            ConfigValue::Boolean(b) => write!(out, "{}", b),
            ConfigValue::Datetime(d) => write!(out, "{}", d),
            ConfigValue::Sequence(items) if items.is_empty() => write!(out, "[]"),
            ConfigValue::Sequence(items) => {
                writeln!(out, "[")?;
                for item in items {
                    indent(out, depth + 1)?;
                    item.write_indented(out, depth + 1)?;
                    writeln!(out, ",")?;
                }
                indent(out, depth)?;
                write!(out, "]")
            }
            ConfigValue::Mapping(map) if map.is_empty() => write!(out, "{{}}"),
            ConfigValue::Mapping(map) => {
                writeln!(out, "{{")?;
                for (key, value) in map {
                    indent(out, depth + 1)?;
                    write!(out, "{} ({}): ", key, value.kind())?;
                    value.write_indented(out, depth + 1)?;
                    writeln!(out)?;
                }
                indent(out, depth)?;
                write!(out, "}}")
            }
        }
    }
}

fn indent(out: &mut dyn Write, depth: usize) -> fmt::Result {
    write!(out, "{:width$}", "", width = depth * 2)
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

impl Renderable for ConfigValue {
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result {
        self.write_indented(out, 0)?;
        writeln!(out)
    }
}

impl Renderable for toml::Table {
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result {
        ConfigValue::from(self.clone()).render_to(out)
    }
}
