//! User input and interaction handling.
//! Collects a [`Configuration`] interactively through a [`Prompter`].

use crate::config::{Archetype, Configuration, Feature, Structure};
use crate::constants::DEFAULT_PROJECT_NAME;
use crate::error::{Error, Result};
use dialoguer::{Input, MultiSelect, Select};

/// Source of interactive answers. Implemented with dialoguer for terminals;
/// tests provide scripted answers.
pub trait Prompter {
    /// Asks for free text, returning `default` on empty input.
    fn text(&self, prompt: &str, default: &str) -> Result<String>;

    /// Asks for one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    /// Asks for any number of `items`, returning the chosen indices.
    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, prompt: &str, default: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn multi_select(&self, prompt: &str, items: &[&str]) -> Result<Vec<usize>> {
        MultiSelect::new()
            .with_prompt(prompt)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn pick<T: Copy>(options: &[T], index: usize) -> Result<T> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| Error::PromptError(format!("selection {} is out of range", index)))
}

/// Asks for the project name, application type, structure and features.
///
/// # Errors
/// * `Error::PromptError` if input cannot be read or a selection is invalid
/// * `Error::ValidationError` if the project name is empty
pub fn collect_configuration(prompter: &dyn Prompter) -> Result<Configuration> {
    let name = prompter.text("Project name", DEFAULT_PROJECT_NAME)?;

    let labels: Vec<&str> = Archetype::ALL.iter().map(|a| a.label()).collect();
    let choice = prompter.select("What kind of Flask app do you want to create?", &labels, 0)?;
    let archetype = pick(&Archetype::ALL, choice)?;

    let labels: Vec<&str> = Structure::ALL.iter().map(|s| s.label()).collect();
    let choice = prompter.select("Choose a project structure", &labels, 0)?;
    let structure = pick(&Structure::ALL, choice)?;

    let labels: Vec<&str> = Feature::ALL.iter().map(|f| f.label()).collect();
    let features = prompter
        .multi_select("Select additional features", &labels)?
        .into_iter()
        .map(|index| pick(&Feature::ALL, index))
        .collect::<Result<Vec<_>>>()?;

    Configuration::new(name.trim(), archetype, structure, features)
}
