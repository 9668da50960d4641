mod settings;

pub use settings::{PageConfig, Settings, TemplateConfig};
