pub mod array_config;
pub mod loader;
pub mod sectioned_config;
pub mod subtable_config;

pub use array_config::{ArrayConfig, ChannelEntry, SensorEntry};
pub use loader::{load, load_with_source, parse, Loaded};
pub use sectioned_config::{GeneralSection, SectionedConfig};
pub use subtable_config::{ChannelTable, SensorTable, SubtableConfig};
