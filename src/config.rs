//! Project configuration model.
//! Describes what to generate (name, application type, directory structure and
//! optional features) and how a configuration is read from an answer document.

use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Kind of starter application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Archetype {
    Hello,
    Webapp,
    Api,
    /// Declared but generated exactly like [`Archetype::Webapp`] (stub).
    Fullstack,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Hello,
        Archetype::Webapp,
        Archetype::Api,
        Archetype::Fullstack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::Hello => "hello",
            Archetype::Webapp => "webapp",
            Archetype::Api => "api",
            Archetype::Fullstack => "fullstack",
        }
    }

    /// Human readable choice shown by the interactive prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Archetype::Hello => "Hello World (single file)",
            Archetype::Webapp => "Web app (HTML forms + templates)",
            Archetype::Api => "REST API (JSON responses)",
            Archetype::Fullstack => "Full stack (Web + API)",
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Archetype::ALL
            .into_iter()
            .find(|archetype| archetype.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownArchetype(s.to_string()))
    }
}

/// Directory layout of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Simple,
    Standard,
    /// Declared but generated exactly like [`Structure::Standard`] (stub).
    Blueprint,
}

impl Structure {
    pub const ALL: [Structure; 3] = [Structure::Simple, Structure::Standard, Structure::Blueprint];

    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Simple => "simple",
            Structure::Standard => "standard",
            Structure::Blueprint => "blueprint",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Structure::Simple => "Simple (a single app.py)",
            Structure::Standard => "Standard (app.py, templates/, static/)",
            Structure::Blueprint => "Blueprint (for larger projects)",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Structure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Structure::ALL
            .into_iter()
            .find(|structure| structure.as_str() == s.trim())
            .ok_or_else(|| Error::UnknownStructure(s.to_string()))
    }
}

/// Optional capability. The derived ordering is the declaration order, which
/// is also the order dependency groups appear in `requirements.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Database,
    /// Adds its dependency but gates no template content yet.
    Auth,
    Forms,
    Env,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Database,
        Feature::Auth,
        Feature::Forms,
        Feature::Env,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Database => "database",
            Feature::Auth => "auth",
            Feature::Forms => "forms",
            Feature::Env => "env",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Feature::Database => "Database (SQLAlchemy)",
            Feature::Auth => "Authentication (Flask-Login)",
            Feature::Forms => "Form handling (Flask-WTF)",
            Feature::Env => "Environment variables (.env)",
        }
    }

    /// Returns `None` for names outside the recognized set.
    pub fn from_name(name: &str) -> Option<Self> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == name.trim())
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts feature names into a feature set, silently dropping duplicates and
/// logging names that are not recognized.
pub fn parse_features<I, S>(names: I) -> BTreeSet<Feature>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let feature = Feature::from_name(name);
            if feature.is_none() {
                warn!("Ignoring unknown feature '{}'", name);
            }
            feature
        })
        .collect()
}

/// Validated description of the project to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub archetype: Archetype,
    pub structure: Structure,
    pub features: BTreeSet<Feature>,
}

impl Configuration {
    /// Builds a configuration, rejecting an empty project name.
    pub fn new<S, I>(
        name: S,
        archetype: Archetype,
        structure: Structure,
        features: I,
    ) -> Result<Self>
    where
        S: Into<String>,
        I: IntoIterator<Item = Feature>,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::ValidationError("project name must not be empty".to_string()));
        }
        Ok(Self {
            name,
            archetype,
            structure,
            features: features.into_iter().collect(),
        })
    }

    /// Configuration used when only a project name is supplied:
    /// a standard web app with environment variable support.
    pub fn with_defaults<S: Into<String>>(name: S) -> Result<Self> {
        Self::new(name, Archetype::Webapp, Structure::Standard, [Feature::Env])
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// Derives the flags consumed by conditional templates.
    pub fn context(&self) -> TemplateContext {
        TemplateContext {
            project_name: self.name.clone(),
            has_database: self.has(Feature::Database),
            has_auth: self.has(Feature::Auth),
            has_forms: self.has(Feature::Forms),
            has_env: self.has(Feature::Env),
        }
    }
}

/// Values a template may reference: boolean flags for conditional blocks and
/// scalar fields for substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    pub project_name: String,
    pub has_database: bool,
    pub has_auth: bool,
    pub has_forms: bool,
    pub has_env: bool,
}

impl TemplateContext {
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "has_database" => Some(self.has_database),
            "has_auth" => Some(self.has_auth),
            "has_forms" => Some(self.has_forms),
            "has_env" => Some(self.has_env),
            _ => None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "project_name" => Some(&self.project_name),
            _ => None,
        }
    }
}

/// Loosely typed answers read from stdin. Missing fields fall back to the
/// defaults of [`Configuration::with_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Answers {
    pub name: Option<String>,
    #[serde(rename = "type", alias = "archetype")]
    pub archetype: Option<String>,
    pub structure: Option<String>,
    pub features: Option<Vec<String>>,
}

impl Answers {
    /// Returns these answers with every field set in `overrides` replaced.
    pub fn with_overrides(self, overrides: Answers) -> Answers {
        Answers {
            name: overrides.name.or(self.name),
            archetype: overrides.archetype.or(self.archetype),
            structure: overrides.structure.or(self.structure),
            features: overrides.features.or(self.features),
        }
    }

    /// Validates the answers into a [`Configuration`].
    ///
    /// # Errors
    /// * `Error::ValidationError` if no usable name is present
    /// * `Error::UnknownArchetype` / `Error::UnknownStructure` for unrecognized values
    pub fn into_configuration(self) -> Result<Configuration> {
        let name = self
            .name
            .ok_or_else(|| Error::ValidationError("project name is required".to_string()))?;
        let archetype = match self.archetype {
            Some(value) => value.parse()?,
            None => Archetype::Webapp,
        };
        let structure = match self.structure {
            Some(value) => value.parse()?,
            None => Structure::Standard,
        };
        let features = match self.features {
            Some(names) => parse_features(names),
            None => BTreeSet::from([Feature::Env]),
        };
        Configuration::new(name, archetype, structure, features)
    }
}

/// Parses an answer document, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::AnswersError` if the content is neither
pub fn parse_answers(content: &str) -> Result<Answers> {
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(_) => {
            debug!("Answers are not JSON, trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::AnswersError(format!("Invalid answers format: {}", e)))
        }
    }
}
