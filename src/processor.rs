//! Project builder.
//! Turns a [`Configuration`] into a [`Plan`] of directories and files, then
//! writes that plan below the output directory.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Archetype, Configuration, Structure};
use crate::constants::{
    APP_FILE, BASE_HTML_FILE, ENV_FILE, FORM_HTML_FILE, GITIGNORE_FILE, INDEX_HTML_FILE,
    README_FILE, REQUIREMENTS_FILE, STATIC_DIRS, TEMPLATES_DIR,
};
use crate::content::{
    build_dependency_list, build_readme, build_starter_source, format_requirements,
};
use crate::error::{Error, Result};
use crate::templates;

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub content: String,
}

/// Everything a generation run creates, relative to the project root.
/// Directories are created before any file is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
}

impl Plan {
    fn add_file<P: Into<PathBuf>, S: Into<String>>(&mut self, path: P, content: S) {
        self.files.push(PlannedFile {
            path: path.into(),
            content: content.into(),
        });
    }
}

/// Result of a successful run, handed back for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub root: PathBuf,
    pub config: Configuration,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Decides which directories and files the configuration produces.
///
/// Blueprint is still planned exactly like the standard structure.
pub fn plan(config: &Configuration) -> Plan {
    let context = config.context();
    let mut plan = Plan::default();

    let with_web_layout = match config.structure {
        Structure::Simple => false,
        Structure::Standard | Structure::Blueprint => true,
    };

    if with_web_layout {
        plan.directories.push(PathBuf::from(TEMPLATES_DIR));
        for dir in STATIC_DIRS {
            plan.directories.push(PathBuf::from(dir));
        }
    }

    plan.add_file(
        APP_FILE,
        build_starter_source(config.archetype, config.structure, &context),
    );

    if with_web_layout && config.archetype != Archetype::Api {
        let templates_dir = Path::new(TEMPLATES_DIR);
        plan.add_file(templates_dir.join(BASE_HTML_FILE), templates::BASE_HTML);
        plan.add_file(templates_dir.join(INDEX_HTML_FILE), templates::INDEX_HTML);
        if context.has_forms {
            plan.add_file(templates_dir.join(FORM_HTML_FILE), templates::FORM_HTML);
        }
    }

    let requirements = build_dependency_list(&config.features, config.archetype);
    plan.add_file(REQUIREMENTS_FILE, format_requirements(&requirements));

    if context.has_env {
        plan.add_file(ENV_FILE, templates::ENV_TEMPLATE);
    }

    plan.add_file(
        README_FILE,
        build_readme(
            &config.name,
            config.archetype,
            context.has_database,
            context.has_forms,
        ),
    );
    plan.add_file(GITIGNORE_FILE, templates::GITIGNORE);

    plan
}

/// Ensures nothing named like the project exists yet.
///
/// # Errors
/// * `Error::AlreadyExists` if any entry is already at `root`, including a
///   symlink whose target is missing
pub fn ensure_absent<P: AsRef<Path>>(root: P) -> Result<()> {
    let root = root.as_ref();
    if fs::symlink_metadata(root).is_ok() {
        return Err(Error::AlreadyExists {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreateError {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    debug!("Writing file: {}", path.display());
    fs::write(path, content).map_err(|source| Error::FileWriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates the planned directories, then writes the planned files, below an
/// existing `root`. Returns the created directories and written files.
///
/// Stops at the first failure. Files written before that point stay on disk.
///
/// # Errors
/// * `Error::DirectoryCreateError` if a subdirectory cannot be created
/// * `Error::FileWriteError` if a file cannot be written
pub fn write_plan(root: &Path, plan: &Plan) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut directories = Vec::with_capacity(plan.directories.len());
    for dir in &plan.directories {
        let target = root.join(dir);
        create_dir(&target)?;
        directories.push(target);
    }

    let mut files = Vec::with_capacity(plan.files.len());
    for file in &plan.files {
        let target = root.join(&file.path);
        write_file(&target, &file.content)?;
        files.push(target);
    }

    Ok((directories, files))
}

/// Generates the project `config.name` inside `output_dir`.
///
/// # Errors
/// * `Error::AlreadyExists` if the project path is taken; nothing is touched
/// * `Error::DirectoryCreateError` / `Error::FileWriteError` on I/O failures,
///   see [`write_plan`]
pub fn generate<P: AsRef<Path>>(config: &Configuration, output_dir: P) -> Result<Generated> {
    let root = output_dir.as_ref().join(&config.name);
    ensure_absent(&root)?;
    create_dir(&root)?;

    let plan = plan(config);
    debug!(
        "Planned {} directories and {} files for '{}'",
        plan.directories.len(),
        plan.files.len(),
        config.name
    );

    let (directories, files) = write_plan(&root, &plan)?;

    Ok(Generated {
        root,
        config: config.clone(),
        directories,
        files,
    })
}
