mod config;
mod error;
mod writer;

pub use config::{
    CONFIG_FILE_NAME, Config, DiscoveredConfig, FileConfig, discover_config, load_config,
    parse_config,
};
pub use error::ConfigError;
pub use writer::write_current_version;
