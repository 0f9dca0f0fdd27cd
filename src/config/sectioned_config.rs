use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use super::array_config::{write_sensor_entries, SensorEntry};
use crate::render::{write_general, Renderable};

/// Root configuration struct with a `[general]` section and `[[sensors]]`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionedConfig {
    pub general: GeneralSection,
    #[serde(default)]
    pub sensors: Vec<SensorEntry>,
}

/// Scalars of the `[general]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GeneralSection {
    pub location: String,
    pub log_level: String,
    #[serde(rename = "tag_data_with_hostname")]
    pub tag_with_hostname: bool,
}

impl Renderable for SectionedConfig {
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result {
        let general = &self.general;
        write_general(
            out,
            &general.location,
            &general.log_level,
            general.tag_with_hostname,
        )?;
        write_sensor_entries(out, &self.sensors)
    }
}
