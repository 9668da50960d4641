//! Named section wrappers over the generic pipeline operations.
//!
//! Each wrapper binds one conventional template name and shapes its
//! arguments into the scope that template expects, then enqueues through
//! `add_single` or `add_list`. Ordering on the page is decided purely by
//! the order these are called in.

use serde_json::{json, Value};

use super::RenderPipeline;

impl RenderPipeline {
    /// Queue the navigation bar, branded with the site owner's name.
    pub fn add_navbar(&mut self, name: impl Into<String>) {
        self.add_single("navbar", json!({ "name": name.into() }));
    }

    /// Queue the main content shell. Takes no data; the fragment is
    /// static markup later sections sit below.
    pub fn add_main_content(&mut self) {
        self.add_single("main_content", json!({}));
    }

    /// Queue the combined name/title/description header.
    pub fn add_intro(
        &mut self,
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.add_single(
            "intro",
            json!({
                "name": name.into(),
                "title": title.into(),
                "description": description.into(),
            }),
        );
    }

    /// Queue the standalone name heading.
    pub fn add_name(&mut self, name: impl Into<String>) {
        self.add_single("name", json!({ "name": name.into() }));
    }

    /// Queue the standalone title line.
    pub fn add_title(&mut self, title: impl Into<String>) {
        self.add_single("title", json!({ "title": title.into() }));
    }

    /// Queue the about-me paragraph.
    pub fn add_about(&mut self, description: impl Into<String>) {
        self.add_single("about_me", json!({ "description": description.into() }));
    }

    /// Queue the skills list, one item fragment per skill.
    pub fn add_skills(&mut self, skills: Vec<String>) {
        let items = skills.into_iter().map(Value::String).collect();
        self.add_list("skills", "skill_item", items, "skill");
    }

    /// Queue the experience list, one item fragment per entry.
    pub fn add_experience(&mut self, entries: Vec<String>) {
        let items = entries.into_iter().map(Value::String).collect();
        self.add_list("experience", "experience_item", items, "experience");
    }

    /// Queue the footer, credited to the site owner's name.
    pub fn add_footer(&mut self, name: impl Into<String>) {
        self.add_single("footer", json!({ "name": name.into() }));
    }
}
