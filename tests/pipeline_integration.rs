//! Cross-component integration tests
//!
//! These tests drive the public pipeline API end to end: enqueue through
//! the section wrappers or the generic operations, drain with `render`,
//! and observe the mounted document. No filesystem or network setup is
//! required; template sources are in-memory.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use persona_renderer::mount::Document;
use persona_renderer::pipeline::{RenderPipeline, RenderReport};
use persona_renderer::template::{
    builtin_source, MemoryTemplateSource, SourceError, TemplateSource,
};

struct TestEnvironment {
    document: Arc<Document>,
    pipeline: RenderPipeline,
}

/// Create a pipeline mounted into a fresh single-container document.
fn create_test_environment(source: Arc<dyn TemplateSource>) -> TestEnvironment {
    let document = Arc::new(Document::with_container("persona"));
    let pipeline = RenderPipeline::with_document(source, document.clone(), "persona");
    TestEnvironment { document, pipeline }
}

fn page_templates() -> MemoryTemplateSource {
    MemoryTemplateSource::with_templates([
        ("greeting", "<p>Hello, {{name}}.</p>"),
        ("closing", "<p>Regards, {{name}}.</p>"),
        ("team", "<section>{{memberItems}}</section>"),
        ("team_item", "<li>{{member.role}} at {{member.company}}</li>"),
    ])
}

/// Source wrapper that records every fetch in arrival order.
struct RecordingSource {
    inner: MemoryTemplateSource,
    log: Mutex<Vec<String>>,
}

impl RecordingSource {
    fn new(inner: MemoryTemplateSource) -> Self {
        Self {
            inner,
            log: Mutex::new(Vec::new()),
        }
    }

    fn fetched(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl TemplateSource for RecordingSource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        self.log.lock().unwrap().push(name.to_string());
        self.inner.fetch(name).await
    }
}

/// Source wrapper that only counts fetches.
struct CountingSource {
    inner: MemoryTemplateSource,
    fetches: AtomicUsize,
}

impl CountingSource {
    fn new(inner: MemoryTemplateSource) -> Self {
        Self {
            inner,
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TemplateSource for CountingSource {
    async fn fetch(&self, name: &str) -> Result<String, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(name).await
    }
}

// =============================================================================
// Ordering Tests
// =============================================================================

mod ordering_tests {
    use super::*;

    #[tokio::test]
    async fn test_fragments_appear_in_enqueue_order() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("closing", json!({"name": "Ada"}));
        env.pipeline.add_single("greeting", json!({"name": "Ada"}));

        env.pipeline.render().await;

        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<p>Regards, Ada.</p><p>Hello, Ada.</p>"
        );
    }

    #[tokio::test]
    async fn test_fetches_follow_enqueue_order() {
        let source = Arc::new(RecordingSource::new(page_templates()));
        let mut env = create_test_environment(source.clone());

        env.pipeline.add_single("closing", json!({}));
        env.pipeline
            .add_list("team", "team_item", vec![], "member");
        env.pipeline.add_single("greeting", json!({}));

        env.pipeline.render().await;

        // One fetch per single task, parent then item per list task
        assert_eq!(source.fetched(), vec!["closing", "team", "team_item", "greeting"]);
    }

    #[tokio::test]
    async fn test_drains_accumulate_across_renders() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("greeting", json!({"name": "Ada"}));
        env.pipeline.render().await;

        env.pipeline.add_single("closing", json!({"name": "Ada"}));
        env.pipeline.render().await;

        // The second drain appends after the first; nothing is replaced
        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<p>Hello, Ada.</p><p>Regards, Ada.</p>"
        );
    }

    #[tokio::test]
    async fn test_queue_is_empty_after_render() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("greeting", json!({}));
        env.pipeline.add_single("closing", json!({}));
        assert_eq!(env.pipeline.queue_size(), 2);

        env.pipeline.render().await;
        assert_eq!(env.pipeline.queue_size(), 0);

        let again = env.pipeline.render().await;
        assert_eq!(again, RenderReport::default());
    }
}

// =============================================================================
// Degradation Tests
// =============================================================================

mod degradation_tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_template_mounts_empty_fragment() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("greeting", json!({"name": "Ada"}));
        env.pipeline.add_single("missing", json!({"name": "Ada"}));
        env.pipeline.add_single("closing", json!({"name": "Ada"}));

        let report = env.pipeline.render().await;

        // The queue never stalls on a bad template
        assert_eq!(report.mounted, 3);
        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<p>Hello, Ada.</p><p>Regards, Ada.</p>"
        );
        assert_eq!(env.pipeline.stats().fetch_failures, 1);
    }

    #[tokio::test]
    async fn test_missing_container_drops_fragments() {
        let document = Arc::new(Document::new());
        let mut pipeline = RenderPipeline::with_document(
            Arc::new(page_templates()),
            document.clone(),
            "persona",
        );

        pipeline.add_single("greeting", json!({"name": "Ada"}));
        let report = pipeline.render().await;

        assert_eq!(report, RenderReport { mounted: 0, skipped: 1 });
        assert_eq!(document.container_html("persona"), None);
    }

    #[tokio::test]
    async fn test_container_created_between_drains() {
        let document = Arc::new(Document::new());
        let mut pipeline = RenderPipeline::with_document(
            Arc::new(page_templates()),
            document.clone(),
            "persona",
        );

        pipeline.add_single("greeting", json!({"name": "Ada"}));
        let first = pipeline.render().await;
        assert_eq!(first.skipped, 1);

        document.add_container("persona");
        pipeline.add_single("closing", json!({"name": "Ada"}));
        let second = pipeline.render().await;

        // Only the fragment rendered after the container existed survives
        assert_eq!(second.mounted, 1);
        assert_eq!(
            document.container_html("persona").unwrap(),
            "<p>Regards, Ada.</p>"
        );
    }

    #[tokio::test]
    async fn test_unresolved_markers_survive_to_the_page() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("greeting", json!({"title": "Analyst"}));
        env.pipeline.render().await;

        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<p>Hello, {{name}}.</p>"
        );
    }
}

// =============================================================================
// List Composition Tests
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_structured_items_resolve_dot_paths() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_list(
            "team",
            "team_item",
            vec![
                json!({"role": "Engineer", "company": "Acme"}),
                json!({"role": "Analyst", "company": "Initech"}),
            ],
            "member",
        );
        env.pipeline.render().await;

        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<section><li>Engineer at Acme</li><li>Analyst at Initech</li></section>"
        );
    }

    #[tokio::test]
    async fn test_empty_list_fetches_and_mounts_shell() {
        let source = Arc::new(CountingSource::new(page_templates()));
        let mut env = create_test_environment(source.clone());

        env.pipeline.add_list("team", "team_item", vec![], "member");
        let report = env.pipeline.render().await;

        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(report.mounted, 1);
        assert_eq!(
            env.document.container_html("persona").unwrap(),
            "<section></section>"
        );
    }
}

// =============================================================================
// Section Wrapper Tests
// =============================================================================

mod wrapper_tests {
    use super::*;

    #[tokio::test]
    async fn test_full_page_assembly_with_builtin_templates() {
        let mut env = create_test_environment(Arc::new(builtin_source()));

        env.pipeline.add_navbar("Grace Hopper");
        env.pipeline.add_main_content();
        env.pipeline
            .add_intro("Grace Hopper", "Rear Admiral", "Invented the compiler.");
        env.pipeline
            .add_skills(vec!["COBOL".to_string(), "Compilers".to_string()]);
        env.pipeline
            .add_experience(vec!["US Navy".to_string(), "Eckert-Mauchly".to_string()]);
        env.pipeline.add_footer("Grace Hopper");

        let report = env.pipeline.render().await;
        assert_eq!(report.mounted, 6);

        let html = env.document.container_html("persona").unwrap();
        assert!(html.contains("Grace Hopper"));
        assert!(html.contains("<li>COBOL</li><li>Compilers</li>"));
        assert!(html.contains("<li>US Navy</li><li>Eckert-Mauchly</li>"));

        // Sections appear in the order they were queued
        let navbar_at = html.find("<nav").unwrap();
        let footer_at = html.find("<footer").unwrap();
        assert!(navbar_at < footer_at);
    }

    #[tokio::test]
    async fn test_wrappers_share_the_generic_queue() {
        let source = Arc::new(RecordingSource::new(builtin_source()));
        let mut env = create_test_environment(source.clone());

        env.pipeline.add_footer("Ada");
        env.pipeline.add_name("Ada");

        env.pipeline.render().await;

        assert_eq!(source.fetched(), vec!["footer", "name"]);
    }
}

// =============================================================================
// Stats Tests
// =============================================================================

mod stats_tests {
    use super::*;

    #[tokio::test]
    async fn test_counters_accumulate_over_lifetime() {
        let mut env = create_test_environment(Arc::new(page_templates()));

        env.pipeline.add_single("greeting", json!({"name": "Ada"}));
        env.pipeline.render().await;

        env.pipeline.add_single("missing", json!({}));
        env.pipeline.add_single("closing", json!({"name": "Ada"}));
        env.pipeline.render().await;

        let stats = env.pipeline.stats();
        assert_eq!(stats.tasks_enqueued, 3);
        assert_eq!(stats.fragments_mounted, 3);
        assert_eq!(stats.appends_skipped, 0);
        assert_eq!(stats.fetch_failures, 1);
    }
}

// =============================================================================
// Concurrency Tests
// =============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test]
    async fn test_independent_pipelines_render_concurrently() {
        let mut env_a = create_test_environment(Arc::new(builtin_source()));
        let mut env_b = create_test_environment(Arc::new(builtin_source()));

        env_a.pipeline.add_name("Ada");
        env_b.pipeline.add_name("Grace");

        let (report_a, report_b) =
            tokio::join!(env_a.pipeline.render(), env_b.pipeline.render());

        assert_eq!(report_a.mounted, 1);
        assert_eq!(report_b.mounted, 1);
        assert!(env_a.document.container_html("persona").unwrap().contains("Ada"));
        assert!(env_b.document.container_html("persona").unwrap().contains("Grace"));
    }
}
