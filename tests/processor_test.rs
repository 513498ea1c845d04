use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use flaskgen::config::{Archetype, Configuration, Feature, Structure};
use flaskgen::error::Error;
use flaskgen::processor::{ensure_absent, generate, plan, write_plan, Plan};
use flaskgen::templates::{ENV_TEMPLATE, GITIGNORE, INDEX_HTML};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Every entry below `root`, relative and `/` separated, directories with a
/// trailing slash.
fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            let relative = entry.path().strip_prefix(root).unwrap();
            let mut name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            if entry.file_type().is_dir() {
                name.push('/');
            }
            name
        })
        .collect()
}

fn set(entries: &[&str]) -> BTreeSet<String> {
    entries.iter().map(|e| e.to_string()).collect()
}

fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

fn paths(plan: &Plan) -> Vec<PathBuf> {
    plan.files.iter().map(|f| f.path.clone()).collect()
}

fn feature_subsets() -> Vec<Vec<Feature>> {
    (0..16u8)
        .map(|mask| {
            Feature::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u8 << *i) != 0)
                .map(|(_, f)| *f)
                .collect()
        })
        .collect()
}

/// The tree a configuration must produce, written out by hand.
fn expected_tree(config: &Configuration) -> BTreeSet<String> {
    let mut expected = set(&["app.py", "requirements.txt", "README.md", ".gitignore"]);
    if config.has(Feature::Env) {
        expected.insert(".env".to_string());
    }
    if config.structure != Structure::Simple {
        expected.extend(set(&["templates/", "static/", "static/css/", "static/js/"]));
        if config.archetype != Archetype::Api {
            expected.extend(set(&["templates/base.html", "templates/index.html"]));
            if config.has(Feature::Forms) {
                expected.insert("templates/form.html".to_string());
            }
        }
    }
    expected
}

#[test]
fn test_api_simple_without_features() {
    let temp_dir = TempDir::new().unwrap();
    let config = Configuration::new("demo", Archetype::Api, Structure::Simple, []).unwrap();

    let generated = generate(&config, temp_dir.path()).unwrap();

    let root = temp_dir.path().join("demo");
    assert_eq!(generated.root, root);
    assert_eq!(generated.files.len(), 4);
    assert!(generated.directories.is_empty());
    assert_eq!(
        tree(&root),
        set(&["app.py", "requirements.txt", "README.md", ".gitignore"])
    );

    let app = read(&root, "app.py");
    assert!(app.contains("@app.route('/api/health')"));
    assert!(app.contains("items = ["));
    assert!(!app.contains("db.Model"));

    assert_eq!(
        read(&root, "requirements.txt"),
        "Flask>=2.3.0\nFlask-CORS>=4.0.0\n"
    );
}

#[test_log::test]
fn test_default_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let config = Configuration::with_defaults("site").unwrap();

    let generated = generate(&config, temp_dir.path()).unwrap();

    assert_eq!(generated.config, config);
    assert_eq!(
        tree(&generated.root),
        set(&[
            ".env",
            ".gitignore",
            "README.md",
            "app.py",
            "requirements.txt",
            "static/",
            "static/css/",
            "static/js/",
            "templates/",
            "templates/base.html",
            "templates/index.html",
        ])
    );
    assert_eq!(read(&generated.root, ".env"), ENV_TEMPLATE);
    assert_eq!(read(&generated.root, ".gitignore"), GITIGNORE);
    assert_eq!(read(&generated.root, "templates/index.html"), INDEX_HTML);
    assert_eq!(
        read(&generated.root, "requirements.txt"),
        "Flask>=2.3.0\npython-dotenv>=1.0.0\n"
    );

    let mut css = fs::read_dir(generated.root.join("static/css")).unwrap();
    assert!(css.next().is_none());
}

#[test]
fn test_standard_api_has_no_html_templates() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        Configuration::new("p", Archetype::Api, Structure::Standard, [Feature::Forms]).unwrap();

    let generated = generate(&config, temp_dir.path()).unwrap();

    assert_eq!(
        tree(&generated.root),
        set(&[
            ".gitignore",
            "README.md",
            "app.py",
            "requirements.txt",
            "static/",
            "static/css/",
            "static/js/",
            "templates/",
        ])
    );
}

#[test]
fn test_forms_add_form_template() {
    let temp_dir = TempDir::new().unwrap();
    let features = [Feature::Forms];
    let config =
        Configuration::new("web", Archetype::Webapp, Structure::Standard, features).unwrap();

    let generated = generate(&config, temp_dir.path()).unwrap();

    let entries = tree(&generated.root);
    assert!(entries.contains("templates/form.html"));
    assert!(!entries.contains(".env"));
    let app = read(&generated.root, "app.py");
    assert!(app.contains("render_template('form.html', form=form)"));
}

#[test]
fn test_every_configuration_produces_exact_tree() {
    let temp_dir = TempDir::new().unwrap();
    let mut count = 0;

    for features in feature_subsets() {
        for archetype in Archetype::ALL {
            for structure in Structure::ALL {
                let name = format!("p{}", count);
                let config =
                    Configuration::new(name, archetype, structure, features.clone()).unwrap();

                let planned = plan(&config);
                let unique: HashSet<_> = planned.files.iter().map(|f| &f.path).collect();
                assert_eq!(unique.len(), planned.files.len());

                let generated = generate(&config, temp_dir.path()).unwrap();
                assert_eq!(
                    tree(&generated.root),
                    expected_tree(&config),
                    "{:?}",
                    config
                );

                let app = read(&generated.root, "app.py");
                assert!(!app.contains("{%") && !app.contains("%}"), "{:?}", config);
                count += 1;
            }
        }
    }

    assert_eq!(count, 192);
}

#[test]
fn test_blueprint_matches_standard() {
    for features in feature_subsets() {
        for archetype in Archetype::ALL {
            let standard =
                Configuration::new("p", archetype, Structure::Standard, features.clone()).unwrap();
            let blueprint =
                Configuration::new("p", archetype, Structure::Blueprint, features.clone()).unwrap();
            assert_eq!(plan(&standard), plan(&blueprint));
        }
    }
}

#[test]
fn test_fullstack_matches_webapp() {
    for structure in [Structure::Standard, Structure::Blueprint] {
        let webapp = Configuration::new("p", Archetype::Webapp, structure, Feature::ALL).unwrap();
        let fullstack =
            Configuration::new("p", Archetype::Fullstack, structure, Feature::ALL).unwrap();

        let webapp_plan = plan(&webapp);
        let fullstack_plan = plan(&fullstack);
        assert_eq!(webapp_plan.directories, fullstack_plan.directories);
        // Only the README narrative differs.
        assert_eq!(paths(&webapp_plan), paths(&fullstack_plan));
        assert_eq!(webapp_plan.files[0], fullstack_plan.files[0]);
    }
}

#[test]
fn test_existing_directory_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("demo");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "keep").unwrap();

    let config = Configuration::with_defaults("demo").unwrap();
    let result = generate(&config, temp_dir.path());

    assert!(matches!(result, Err(Error::AlreadyExists { ref path }) if *path == existing));
    assert_eq!(tree(&existing), set(&["keep.txt"]));
}

#[test]
fn test_existing_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("demo"), "not a directory").unwrap();

    let config = Configuration::with_defaults("demo").unwrap();
    let result = generate(&config, temp_dir.path());

    assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    assert_eq!(read(temp_dir.path(), "demo"), "not a directory");
    assert_eq!(tree(temp_dir.path()), set(&["demo"]));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlink_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let link = temp_dir.path().join("demo");
    std::os::unix::fs::symlink(temp_dir.path().join("missing"), &link).unwrap();

    let config = Configuration::with_defaults("demo").unwrap();
    let result = generate(&config, temp_dir.path());

    assert!(matches!(result, Err(Error::AlreadyExists { ref path }) if *path == link));
    let metadata = fs::symlink_metadata(&link).unwrap();
    assert!(metadata.file_type().is_symlink());
    assert!(!temp_dir.path().join("missing").exists());
}

#[test]
fn test_ensure_absent() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ensure_absent(temp_dir.path().join("new_dir")).is_ok());
    assert!(ensure_absent(temp_dir.path()).is_err());
}

#[test]
fn test_root_creation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let config = Configuration::with_defaults("demo").unwrap();
    let result = generate(&config, &blocker);

    assert!(matches!(result, Err(Error::DirectoryCreateError { .. })));
}

#[test]
fn test_subdirectory_creation_failure() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("static"), "").unwrap();

    let config = Configuration::with_defaults("demo").unwrap();
    let result = write_plan(&root, &plan(&config));

    let css = root.join("static/css");
    assert!(matches!(result, Err(Error::DirectoryCreateError { ref path, .. }) if *path == css));
    assert!(root.join("templates").is_dir());
    assert!(!root.join("app.py").exists());
}

#[test]
fn test_file_write_failure_keeps_earlier_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("demo");
    fs::create_dir_all(root.join("README.md")).unwrap();

    let config = Configuration::new("demo", Archetype::Webapp, Structure::Simple, []).unwrap();
    let result = write_plan(&root, &plan(&config));

    let blocked = root.join("README.md");
    assert!(matches!(result, Err(Error::FileWriteError { ref path, .. }) if *path == blocked));
    assert!(root.join("app.py").is_file());
    assert!(root.join("requirements.txt").is_file());
    assert!(!root.join(".gitignore").exists());
}

#[test]
fn test_generation_is_reproducible() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let config = Configuration::new(
        "demo",
        Archetype::Webapp,
        Structure::Standard,
        [Feature::Database, Feature::Forms, Feature::Env],
    )
    .unwrap();

    generate(&config, first.path()).unwrap();
    generate(&config, second.path()).unwrap();

    let a = first.path().join("demo");
    let b = second.path().join("demo");
    assert!(!dir_diff::is_different(&a, &b).unwrap());
}
