mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, EtlSettings, LoggingSettings, ServerSettings, Settings,
};
