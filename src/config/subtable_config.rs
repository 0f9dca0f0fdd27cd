use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Write};

use crate::render::{write_channel, write_general, write_keyed_sensor, Renderable};

/// Root configuration struct expecting `[sensors.<key>]` subtables.
///
/// Keys are unique per table. `render` visits them in map order, which is
/// not stable between runs; use `render_sorted` when output is compared.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubtableConfig {
    pub location: String,
    pub log_level: String,
    #[serde(rename = "tag_data_with_hostname")]
    pub tag_with_hostname: bool,
    #[serde(default)]
    pub sensors: HashMap<String, SensorTable>,
}

/// Body of one `[sensors.<key>]` table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SensorTable {
    pub uuid: String,
    #[serde(default)]
    pub channels: HashMap<String, ChannelTable>,
}

/// Body of one `[sensors.<key>.channels.<chkey>]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChannelTable {
    pub address: i64,
    pub sample_freq: i64,
}

impl SubtableConfig {
    /// Sensors ordered by key
    pub fn sorted_sensors(&self) -> Vec<(&str, &SensorTable)> {
        sorted(&self.sensors)
    }

    fn write_sensor(
        out: &mut dyn Write,
        key: &str,
        sensor: &SensorTable,
        ordered: bool,
    ) -> fmt::Result {
        write_keyed_sensor(out, key, &sensor.uuid)?;
        if ordered {
            for (name, channel) in sensor.sorted_channels() {
                write_channel(out, name, channel.address, channel.sample_freq)?;
            }
        } else {
            for (name, channel) in &sensor.channels {
                write_channel(out, name, channel.address, channel.sample_freq)?;
            }
        }
        Ok(())
    }
}

impl SensorTable {
    /// Channels ordered by key
    pub fn sorted_channels(&self) -> Vec<(&str, &ChannelTable)> {
        sorted(&self.channels)
    }
}

fn sorted<V>(map: &HashMap<String, V>) -> Vec<(&str, &V)> {
    let mut entries: Vec<(&str, &V)> = map
        .iter()
        .map(|(k, v)| (k.as_str(), v))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

impl Renderable for SubtableConfig {
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result {
        write_general(
            out,
            &self.location,
            &self.log_level,
            self.tag_with_hostname,
        )?;
        for (key, sensor) in &self.sensors {
            Self::write_sensor(out, key, sensor, false)?;
        }
        Ok(())
    }

    fn render_sorted_to(&self, out: &mut dyn Write) -> fmt::Result {
        write_general(
            out,
            &self.location,
            &self.log_level,
            self.tag_with_hostname,
        )?;
        for (key, sensor) in self.sorted_sensors() {
            Self::write_sensor(out, key, sensor, true)?;
        }
        Ok(())
    }
}
