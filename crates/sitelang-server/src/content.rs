// crates/sitelang-server/src/content.rs
// ============================================================================
// Module: Site Content
// Description: Built-in pages text, posts, projects, and their translations.
// Purpose: Provide the static content the rendering layer localizes.
// Dependencies: sitelang-core, time
// ============================================================================

//! ## Overview
//! Canonical source text is English. [`site_messages`] builds the built-in
//! translation catalog; operators may extend or override it with a
//! translation file.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sitelang_core::TranslationCatalog;
use sitelang_core::TranslationError;
use time::Date;
use time::macros::date;

// ============================================================================
// SECTION: Messages
// ============================================================================

/// Site title.
pub const SITE_TITLE: &str = "MuMind (David B) personal website";
/// Meta description.
pub const SITE_DESCRIPTION: &str = "Personal website with musings and portfolio stuff";
/// Home page introduction.
pub const INTRO: &str = "I’m a software engineer and explorer.";
/// Projects link and heading.
pub const MY_PROJECTS: &str = "My projects";
/// Posts list heading.
pub const RECENT_POSTS: &str = "Recent posts";
/// Link back to the home page.
pub const BACK_TO_HOME: &str = "Back to home";
/// Projects page lead paragraph.
pub const PROJECTS_LEAD: &str = "Here are some of my more shareable projects.";
/// Project source link text.
pub const VIEW_ON_GITHUB: &str = "View on GitHub";
/// Not-found heading.
pub const PAGE_NOT_FOUND: &str = "Page not found";
/// Not-found explanation.
pub const PAGE_NOT_FOUND_DETAIL: &str = "The page you requested does not exist.";
/// Accessible label for the language selector.
pub const LANGUAGE: &str = "Language";

/// Built-in `(message, language, text)` entries.
const SITE_MESSAGES: &[(&str, &str, &str)] = &[
    (SITE_TITLE, "es", "MuMind (David B), sitio web personal"),
    (SITE_DESCRIPTION, "es", "Sitio web personal con reflexiones y material de portafolio"),
    (INTRO, "es", "Soy ingeniero de software y explorador."),
    (MY_PROJECTS, "es", "Mis proyectos"),
    (RECENT_POSTS, "es", "Entradas recientes"),
    (BACK_TO_HOME, "es", "Regresar"),
    (PROJECTS_LEAD, "es", "Estos son algunos de mis proyectos más fáciles de compartir."),
    (VIEW_ON_GITHUB, "es", "Ver en GitHub"),
    (PAGE_NOT_FOUND, "es", "Página no encontrada"),
    (PAGE_NOT_FOUND_DETAIL, "es", "La página que buscas no existe."),
    (LANGUAGE, "es", "Idioma"),
    ("Revamped personal website", "es", "Renové mi sitio web"),
    ("Markdown Tailwind struggles", "es", "Luchas con Markdown y Tailwind"),
    (
        "I rebuilt this site so visitors see it in their own language.",
        "es",
        "Reconstruí este sitio para que cada visitante lo vea en su propio idioma.",
    ),
    (
        "Styling rendered Markdown with utility classes took more effort than expected.",
        "es",
        "Dar estilo al Markdown renderizado con clases utilitarias costó más de lo esperado.",
    ),
    (
        "A plugin for the Obsidian note-taking app that syncs your vault to GitHub.",
        "es",
        "Un complemento para la app de notas Obsidian que sincroniza tu bóveda con GitHub.",
    ),
    (
        "A browser game built with a friend during a hackathon.",
        "es",
        "Un juego de navegador creado con un amigo durante un hackatón.",
    ),
    (
        "Parses and analyzes VimScript with Tree-sitter, with Python bindings.",
        "es",
        "Analiza VimScript con Tree-sitter y ofrece enlaces para Python.",
    ),
];

/// Builds the built-in translation catalog.
///
/// # Errors
///
/// Returns [`TranslationError`] when a built-in entry names a malformed
/// language.
pub fn site_messages() -> Result<TranslationCatalog, TranslationError> {
    TranslationCatalog::from_entries(SITE_MESSAGES.iter().copied())
}

// ============================================================================
// SECTION: Posts
// ============================================================================

/// A published post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post {
    /// URL identifier under `/posts/`.
    pub id: &'static str,
    /// Source-language title.
    pub title: &'static str,
    /// Publication date.
    pub date: Date,
    /// Source-language summary paragraph.
    pub summary: &'static str,
}

/// Posts, newest first.
pub const POSTS: &[Post] = &[
    Post {
        id: "revamped-website",
        title: "Revamped personal website",
        date: date!(2024 - 01 - 05),
        summary: "I rebuilt this site so visitors see it in their own language.",
    },
    Post {
        id: "markdown-tailwind",
        title: "Markdown Tailwind struggles",
        date: date!(2023 - 11 - 20),
        summary: "Styling rendered Markdown with utility classes took more effort than expected.",
    },
];

/// Looks up a post by identifier.
#[must_use]
pub fn find_post(id: &str) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id == id)
}

// ============================================================================
// SECTION: Projects
// ============================================================================

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    /// Project name (not translated).
    pub name: &'static str,
    /// Source-language description.
    pub description: &'static str,
    /// Off-site source link.
    pub url: &'static str,
}

/// Showcased projects.
pub const PROJECTS: &[Project] = &[
    Project {
        name: "Obsidian FIT - File gIT",
        description: "A plugin for the Obsidian note-taking app that syncs your vault to GitHub.",
        url: "https://github.com/joshuakto/fit",
    },
    Project {
        name: "Spice of Life",
        description: "A browser game built with a friend during a hackathon.",
        url: "https://github.com/dbarnett/spice-of-life",
    },
    Project {
        name: "vim-plugin-metadata",
        description: "Parses and analyzes VimScript with Tree-sitter, with Python bindings.",
        url: "https://github.com/dbarnett/vim-plugin-metadata",
    },
];
