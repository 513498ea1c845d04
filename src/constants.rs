//! Common constants used throughout the flaskgen application.

/// Starter source file written at the project root
pub const APP_FILE: &str = "app.py";

/// Dependency manifest, one requirement per line
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

pub const ENV_FILE: &str = ".env";
pub const README_FILE: &str = "README.md";
pub const GITIGNORE_FILE: &str = ".gitignore";

/// HTML templates directory and the files placed in it
pub const TEMPLATES_DIR: &str = "templates";
pub const BASE_HTML_FILE: &str = "base.html";
pub const INDEX_HTML_FILE: &str = "index.html";
pub const FORM_HTML_FILE: &str = "form.html";

/// Empty asset directories created for non-simple structures
pub const STATIC_DIRS: [&str; 2] = ["static/css", "static/js"];

/// Project name offered by the interactive prompt
pub const DEFAULT_PROJECT_NAME: &str = "myflaskapp";
