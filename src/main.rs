use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use persona_renderer::config::Settings;
use persona_renderer::mount::Document;
use persona_renderer::pipeline::RenderPipeline;
use persona_renderer::template::{builtin_source, DirectoryTemplateSource, TemplateSource};

/// Profile data the page is rendered from.
#[derive(Debug, Clone, Deserialize)]
struct Profile {
    name: String,
    title: String,
    description: String,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    experience: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            title: "Software Engineer".to_string(),
            description: "Builds reliable backend systems and writes about them.".to_string(),
            skills: vec![
                "Rust".to_string(),
                "Distributed systems".to_string(),
                "Operational tooling".to_string(),
            ],
            experience: vec![
                "Senior Engineer, Example Corp (2021-)".to_string(),
                "Engineer, Startup Labs (2018-2021)".to_string(),
            ],
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Load configuration
    let settings = Settings::new()?;
    tracing::info!("Configuration loaded");

    let profile = load_profile(&settings.page.profile).await;
    let source = select_source(&settings);

    let document = Arc::new(Document::with_container(settings.page.container_id.as_str()));
    let mut pipeline = RenderPipeline::with_document(
        source,
        document.clone(),
        settings.page.container_id.as_str(),
    );

    // Page assembly order is the call order here
    pipeline.add_navbar(profile.name.as_str());
    pipeline.add_main_content();
    pipeline.add_intro(
        profile.name.as_str(),
        profile.title.as_str(),
        profile.description.as_str(),
    );
    pipeline.add_skills(profile.skills.clone());
    pipeline.add_experience(profile.experience.clone());
    pipeline.add_footer(profile.name.as_str());

    let report = pipeline.render().await;
    tracing::info!(
        mounted = report.mounted,
        skipped = report.skipped,
        "Page rendered"
    );

    let content = document
        .container_html(&settings.page.container_id)
        .unwrap_or_default();
    let page = page_shell(&settings.page.container_id, &content);
    tokio::fs::write(&settings.page.output, page)
        .await
        .with_context(|| format!("Failed to write {}", settings.page.output))?;
    tracing::info!(path = %settings.page.output, "Page written");

    Ok(())
}

/// Read the profile file, falling back to the sample profile when it is
/// missing or malformed.
async fn load_profile(path: &str) -> Profile {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(profile) => {
                tracing::info!(path = %path, "Profile loaded");
                profile
            }
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Profile file invalid; using sample profile");
                Profile::default()
            }
        },
        Err(e) => {
            tracing::info!(path = %path, error = %e, "No profile file; using sample profile");
            Profile::default()
        }
    }
}

/// Serve templates from the configured directory when it exists,
/// otherwise fall back to the built-in fragments.
fn select_source(settings: &Settings) -> Arc<dyn TemplateSource> {
    let dir = Path::new(&settings.templates.dir);
    if dir.is_dir() {
        tracing::info!(dir = %settings.templates.dir, "Serving templates from directory");
        Arc::new(DirectoryTemplateSource::new(
            dir,
            settings.templates.extension.as_str(),
        ))
    } else {
        tracing::info!("Template directory not found; using built-in fragments");
        Arc::new(builtin_source())
    }
}

fn page_shell(container_id: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n    <meta charset=\"utf-8\">\n    <title>Persona</title>\n</head>\n<body>\n    <div id=\"{}\">{}</div>\n</body>\n</html>\n",
        container_id, content
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
