mod loader;

pub use loader::global_config_path;
pub use loader::is_stdout;
pub use loader::load_config;
pub use loader::load_config_from;
pub use loader::Config;
pub use loader::ConfigError;
pub use loader::ExportConfig;
pub use loader::PreviewConfig;
