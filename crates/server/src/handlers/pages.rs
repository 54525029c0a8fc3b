//! # Page Routes
//!
//! The site's pages are pre-built HTML files served as-is from the configured pages
//! directory. A missing file answers `404 Not Found`.

use super::AppState;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Route path and the HTML file it serves.
pub const PAGES: &[(&str, &str)] = &[
    ("/", "index.html"),
    ("/login", "login.html"),
    ("/signup", "signup.html"),
    ("/medicines", "medicines.html"),
    ("/about", "about.html"),
    ("/dashboard", "dashboard.html"),
];

/// Builds the page routes plus the `/static` asset directory.
pub fn page_routes(pages_dir: &str, static_dir: &str) -> Router<AppState> {
    let pages_dir = Path::new(pages_dir);
    PAGES
        .iter()
        .fold(Router::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(pages_dir.join(file)))
        })
        .nest_service("/static", ServeDir::new(static_dir))
}
