//! Content assemblers.
//! Pure functions deriving the generated files that depend on the configuration:
//! the requirement list, the README and the starter `app.py`.

use std::collections::BTreeSet;

use crate::config::{Archetype, Feature, Structure, TemplateContext};
use crate::renderer::render;
use crate::templates;

/// Always the first requirement.
pub const BASE_REQUIREMENT: &str = "Flask>=2.3.0";

/// Added for the `api` application type only.
pub const CORS_REQUIREMENT: &str = "Flask-CORS>=4.0.0";

fn feature_requirements(feature: Feature) -> &'static [&'static str] {
    match feature {
        Feature::Database => &["Flask-SQLAlchemy>=3.0.0"],
        Feature::Auth => &["Flask-Login>=0.6.0"],
        Feature::Forms => &["Flask-WTF>=1.1.0", "WTForms>=3.0.0"],
        Feature::Env => &["python-dotenv>=1.0.0"],
    }
}

/// Builds the requirement list: the base framework, then one group per
/// feature in declaration order, then CORS support for APIs.
pub fn build_dependency_list(features: &BTreeSet<Feature>, archetype: Archetype) -> Vec<String> {
    let mut requirements = vec![BASE_REQUIREMENT.to_string()];

    for feature in features {
        let group = feature_requirements(*feature);
        requirements.extend(group.iter().map(|r| r.to_string()));
    }

    if archetype == Archetype::Api {
        requirements.push(CORS_REQUIREMENT.to_string());
    }

    requirements
}

/// Formats requirements as `requirements.txt` content, one per line.
pub fn format_requirements(requirements: &[String]) -> String {
    requirements.iter().map(|r| format!("{}\n", r)).collect()
}

fn archetype_description(archetype: Archetype) -> &'static str {
    match archetype {
        Archetype::Hello => "A simple Hello World application",
        Archetype::Webapp => "A web application with HTML templates and forms",
        Archetype::Api => "A RESTful application serving a JSON API",
        Archetype::Fullstack => "A full stack application providing both a web UI and an API",
    }
}

const README_SETUP: &str = r#"## Setup

### 1. Create and activate a virtual environment

```bash
python3 -m venv venv
source venv/bin/activate  # Windows: venv\Scripts\activate
```

### 2. Install dependencies

```bash
pip install -r requirements.txt
```

*Note: after adding packages, refresh the list with `pip freeze > requirements.txt`*

### 3. Configure environment variables

Edit the `.env` file and adjust the settings you need:

```bash
SECRET_KEY=your-production-secret-key-here
```
"#;

const README_DATABASE_SETUP: &str = r#"
### 4. Initialize the database

```bash
flask shell
>>> from app import app, db
>>> with app.app_context():
...     db.create_all()
>>> exit()
```
"#;

const README_RUN: &str = r#"
## Running

### Start the development server

```bash
flask run
```

or

```bash
python app.py
```

The application is served at http://localhost:5000.

## Features
"#;

const README_TREE_ROOT: &str = r#"├── app.py              # Main application
├── requirements.txt    # Python dependencies
├── .env               # Environment variables
├── .gitignore         # Git ignore rules
├── README.md          # This file"#;

const README_TREE_WEB: &str = r#"
├── templates/         # HTML templates
│   ├── base.html
│   └── index.html
└── static/           # Static files
    ├── css/
    └── js/"#;

const README_DEVELOPMENT: &str = r#"
```

## Development

### Debug mode

During development the `.env` file sets `DEBUG=True`.

### Production

Before deploying:

- Replace `SECRET_KEY` with a strong value
- Set `DEBUG=False`
- Point the database URL at the production database
"#;

/// Assembles `README.md`.
///
/// Setup and run instructions are always present. The database step, the
/// feature bullets and the `templates/` and `static/` part of the directory
/// tree depend on the arguments.
pub fn build_readme(
    name: &str,
    archetype: Archetype,
    has_database: bool,
    has_forms: bool,
) -> String {
    let mut readme = format!("# {}\n\n{}\n\n", name, archetype_description(archetype));

    readme.push_str(README_SETUP);
    if has_database {
        readme.push_str(README_DATABASE_SETUP);
    }
    readme.push_str(README_RUN);

    if matches!(archetype, Archetype::Webapp | Archetype::Fullstack) {
        readme.push_str("\n- Web UI\n- HTML templates (Jinja2)");
        if has_forms {
            readme.push_str("\n- Form handling (Flask-WTF)");
        }
    }
    if matches!(archetype, Archetype::Api | Archetype::Fullstack) {
        readme.push_str("\n- REST API\n- JSON responses");
    }
    if has_database {
        readme.push_str("\n- Database integration (SQLAlchemy)");
    }

    readme.push_str(&format!("\n\n## Project structure\n\n```\n{}/\n", name));
    readme.push_str(README_TREE_ROOT);
    if archetype != Archetype::Hello {
        readme.push_str(README_TREE_WEB);
    }
    readme.push_str(README_DEVELOPMENT);

    readme
}

/// Key into the template bank for the starter `app.py`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterSource {
    HelloWorld,
    WebApp,
    Api,
}

impl StarterSource {
    pub fn template(&self) -> &'static str {
        match self {
            StarterSource::HelloWorld => templates::HELLO_WORLD_APP,
            StarterSource::WebApp => templates::WEBAPP_MAIN,
            StarterSource::Api => templates::API_MAIN,
        }
    }

    /// Hello World has no conditional sections and is written as is.
    pub fn is_conditional(&self) -> bool {
        !matches!(self, StarterSource::HelloWorld)
    }
}

/// Chooses the starter source. The simple layout falls back to Hello World,
/// the others fall back to the web app.
pub fn select_starter_source(archetype: Archetype, structure: Structure) -> StarterSource {
    match structure {
        Structure::Simple => match archetype {
            Archetype::Webapp => StarterSource::WebApp,
            Archetype::Api => StarterSource::Api,
            Archetype::Hello | Archetype::Fullstack => StarterSource::HelloWorld,
        },
        Structure::Standard | Structure::Blueprint => match archetype {
            Archetype::Api => StarterSource::Api,
            Archetype::Hello | Archetype::Webapp | Archetype::Fullstack => StarterSource::WebApp,
        },
    }
}

/// Produces the final `app.py` content.
pub fn build_starter_source(
    archetype: Archetype,
    structure: Structure,
    context: &TemplateContext,
) -> String {
    let source = select_starter_source(archetype, structure);
    if source.is_conditional() {
        render(source.template(), context)
    } else {
        source.template().to_string()
    }
}
