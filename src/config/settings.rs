use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::mount::DEFAULT_CONTAINER_ID;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub templates: TemplateConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory holding template files, one file per template name
    #[serde(default = "default_template_dir")]
    pub dir: String,
    /// File extension appended to template names on lookup
    #[serde(default = "default_template_extension")]
    pub extension: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Container id fragments are appended into
    #[serde(default = "default_container_id")]
    pub container_id: String,
    /// Path the assembled page is written to
    #[serde(default = "default_output")]
    pub output: String,
    /// Path of the profile data file feeding the section wrappers
    #[serde(default = "default_profile")]
    pub profile: String,
}

fn default_template_dir() -> String {
    "templates".to_string()
}

fn default_template_extension() -> String {
    "html".to_string()
}

fn default_container_id() -> String {
    DEFAULT_CONTAINER_ID.to_string()
}

fn default_output() -> String {
    "persona.html".to_string()
}

fn default_profile() -> String {
    "profile.json".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("templates.dir", "templates")?
            .set_default("templates.extension", "html")?
            .set_default("page.container_id", DEFAULT_CONTAINER_ID)?
            .set_default("page.output", "persona.html")?
            .set_default("page.profile", "profile.json")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // TEMPLATES_DIR, TEMPLATES_EXTENSION, PAGE_OUTPUT, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(","),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
            extension: default_template_extension(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            container_id: default_container_id(),
            output: default_output(),
            profile: default_profile(),
        }
    }
}
