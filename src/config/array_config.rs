use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

use crate::render::{write_channel, write_general, write_named_sensor, Renderable};

/// Root configuration struct expecting `[[sensors]]` TOML array format.
///
/// Sensor and channel order is the order of the source file; repeated names
/// are kept as separate entries.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArrayConfig {
    pub location: String,
    pub log_level: String,
    #[serde(rename = "tag_data_with_hostname")]
    pub tag_with_hostname: bool,
    #[serde(default)]
    pub sensors: Vec<SensorEntry>,
}

/// One sensor entry, matching each `[[sensors]]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SensorEntry {
    pub name: String,
    pub uuid: String,
    #[serde(default)]
    pub channels: Vec<ChannelEntry>,
}

/// One `[[sensors.channels]]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChannelEntry {
    pub name: String,
    pub address: i64,
    pub sample_freq: i64,
}

/// Sensor blocks shared by every sequence-shaped config
pub(crate) fn write_sensor_entries(out: &mut dyn Write, sensors: &[SensorEntry]) -> fmt::Result {
    for sensor in sensors {
        write_named_sensor(out, &sensor.name, &sensor.uuid)?;
        for channel in &sensor.channels {
            write_channel(out, &channel.name, channel.address, channel.sample_freq)?;
        }
    }
    Ok(())
}

impl Renderable for ArrayConfig {
    fn render_to(&self, out: &mut dyn Write) -> fmt::Result {
        write_general(
            out,
            &self.location,
            &self.log_level,
            self.tag_with_hostname,
        )?;
        write_sensor_entries(out, &self.sensors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;

    const LAB: &str = r#"
location = "lab-1"
log_level = "debug"
tag_data_with_hostname = true

[[sensors]]
name = "s1"
uuid = "u-1"

[[sensors.channels]]
name = "c1"
address = 10
sample_freq = 100
"#;

    #[test]
    fn test_parse_lab_example() {
        let config: ArrayConfig = parse(LAB).unwrap();
        assert_eq!(config.location, "lab-1");
        assert_eq!(config.log_level, "debug");
        assert!(config.tag_with_hostname);
        assert_eq!(config.sensors.len(), 1);

        let sensor = &config.sensors[0];
        assert_eq!(sensor.name, "s1");
        assert_eq!(sensor.uuid, "u-1");
        assert_eq!(
            sensor.channels,
            vec![ChannelEntry {
                name: "c1".to_string(),
                address: 10,
                sample_freq: 100,
            }]
        );
    }

    #[test]
    fn test_render_lab_example() {
        let text = parse::<ArrayConfig>(LAB).unwrap().render();
        assert!(text.contains("location                 : lab-1"));
        assert!(text.contains("sensor \"s1\" (UUID: \"u-1\")"));
        assert!(text.contains("address     : 10"));
        assert!(text.contains("sample_freq : 100"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let toml = r#"
location = "bench"
log_level = "info"
tag_data_with_hostname = false

[[sensors]]
name = "zeta"
uuid = "z"
[[sensors.channels]]
name = "b"
address = 2
sample_freq = 20
[[sensors.channels]]
name = "a"
address = 1
sample_freq = 10

[[sensors]]
name = "alpha"
uuid = "a"

[[sensors]]
name = "zeta"
uuid = "z2"
"#;
        let config: ArrayConfig = parse(toml).unwrap();
        let names: Vec<&str> = config.sensors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "zeta"]);
        assert!(config.sensors[1].channels.is_empty());

        let text = config.render();
        let zeta = text.find("sensor \"zeta\" (UUID: \"z\")").unwrap();
        let b = text.find("channel \"b\"").unwrap();
        let a = text.find("channel \"a\"").unwrap();
        let alpha = text.find("sensor \"alpha\"").unwrap();
        let zeta2 = text.find("sensor \"zeta\" (UUID: \"z2\")").unwrap();
        assert!(zeta < b && b < a && a < alpha && alpha < zeta2);
    }

    #[test]
    fn test_wide_integers_survive() {
        let toml = r#"
location = "edge"
log_level = "trace"
tag_data_with_hostname = false

[[sensors]]
name = "wide"
uuid = "w"
[[sensors.channels]]
name = "max"
address = 9223372036854775807
sample_freq = 1
"#;
        let config: ArrayConfig = parse(toml).unwrap();
        let channel = &config.sensors[0].channels[0];
        assert_eq!(channel.address, i64::MAX);
        assert_eq!(channel.sample_freq, 1);

        let text = config.render();
        assert!(text.contains("address     : 9223372036854775807"));
    }

    #[test]
    fn test_address_past_i64_rejected() {
        let toml = LAB.replace("address = 10", "address = 9223372036854775808");
        let err = parse::<ArrayConfig>(&toml).unwrap_err();
        assert_eq!(err.phase(), "decode");
    }

    #[test]
    fn test_sample_freq_below_i64_rejected() {
        let toml = LAB.replace("sample_freq = 100", "sample_freq = -9223372036854775809");
        let err = parse::<ArrayConfig>(&toml).unwrap_err();
        assert_eq!(err.phase(), "decode");
    }

    #[test]
    fn test_string_in_integer_field_rejected() {
        let toml = LAB.replace("address = 10", "address = \"ten\"");
        let err = parse::<ArrayConfig>(&toml).unwrap_err();
        assert_eq!(err.phase(), "decode");
    }

    #[test]
    fn test_missing_scalar_rejected() {
        let toml = LAB.replace("log_level = \"debug\"\n", "");
        assert!(parse::<ArrayConfig>(&toml).is_err());
    }

    #[test]
    fn test_serialize_uses_external_names() {
        let config: ArrayConfig = parse(LAB).unwrap();
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("log_level = \"debug\""));
        assert!(text.contains("tag_data_with_hostname = true"));
        assert!(text.contains("sample_freq = 100"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let config: ArrayConfig = parse(LAB).unwrap();
        assert_eq!(config.render(), config.render());
    }
}
