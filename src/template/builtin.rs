//! Built-in portfolio template fragments.
//!
//! Default markup for every named section wrapper, served from an
//! in-memory source. The markup is demo material, not contract; a page
//! author replaces it by pointing the pipeline at their own source.

use super::MemoryTemplateSource;

/// The default fragment set, as `(name, text)` pairs.
///
/// Raw strings use the `r##` delimiter because the markup carries both
/// `"` and `#` (fragment anchors such as `href="#about"`).
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    (
        "navbar",
        r##"<nav class="navbar navbar-expand-lg navbar-dark">
    <a class="navbar-brand" href="#" id="name">{{name}}</a>
    <div class="collapse navbar-collapse" id="navbarNav">
        <ul class="navbar-nav ml-auto">
            <li class="nav-item"><a class="nav-link" href="#about">About Me</a></li>
            <li class="nav-item"><a class="nav-link" href="#skills">Skills</a></li>
            <li class="nav-item"><a class="nav-link" href="#experience">Experience</a></li>
            <li class="nav-item"><a class="nav-link" href="#contact">Contact</a></li>
        </ul>
    </div>
</nav>"##,
    ),
    ("main_content", r##"<div class="container mt-5"></div>"##),
    (
        "intro",
        r##"<header class="persona-intro"><h1 class="persona-name">{{name}}</h1><h2 class="persona-title">{{title}}</h2><p class="persona-description">{{description}}</p></header>"##,
    ),
    ("name", r##"<h1 class="persona-name">{{name}}</h1>"##),
    ("title", r##"<h2 class="persona-title">{{title}}</h2>"##),
    ("about_me", r##"<p class="persona-description">{{description}}</p>"##),
    (
        "skills",
        r##"<div class="persona-skills"><h3>Skills</h3><ul>{{skillItems}}</ul></div>"##,
    ),
    ("skill_item", r##"<li>{{skill}}</li>"##),
    (
        "experience",
        r##"<div class="persona-experience"><h3>Experience</h3><ul>{{experienceItems}}</ul></div>"##,
    ),
    ("experience_item", r##"<li>{{experience}}</li>"##),
    (
        "footer",
        r##"<footer class="text-center py-3"><p>&copy; 2024 {{name}}. All rights reserved.</p></footer>"##,
    ),
];

/// A memory source preloaded with the default portfolio fragments.
pub fn builtin_source() -> MemoryTemplateSource {
    MemoryTemplateSource::with_templates(BUILTIN_TEMPLATES.iter().copied())
}
