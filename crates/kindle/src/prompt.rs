//! Interactive collection of project answers

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use kindle_core::types::{
    validate_project_name, Answers, License, DEFAULT_DESCRIPTION, DEFAULT_PROJECT_NAME,
};

/// Validation callback for free-text prompts; `Err` carries the message shown
/// before asking again
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Source of answers to interactive questions
pub trait Prompter {
    /// Ask for free text, repeating until `validate` accepts the input
    fn text(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String>;

    /// Ask to pick one of `items`; returns the chosen index
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize>;
}

/// Prompter backed by the terminal
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        let value: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|input: &String| validate(input))
            .interact_text()?;
        Ok(value)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }
}

/// Answers given up front on the command line
#[derive(Debug, Clone, Default)]
pub struct Prefilled {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<License>,
}

/// Ask for name, description and license, in that order.
///
/// Prefilled values skip their prompt. A prefilled name is validated like a
/// typed one, but an invalid value is an error instead of a new question.
pub fn collect_answers(prefilled: &Prefilled, prompter: &mut dyn Prompter) -> Result<Answers> {
    let name = match &prefilled.name {
        Some(name) => validate_project_name(name)?,
        None => prompter.text("Project name", DEFAULT_PROJECT_NAME, &name_validator)?,
    };

    let description = match &prefilled.description {
        Some(description) => description.clone(),
        None => prompter.text("Project description", DEFAULT_DESCRIPTION, &|_: &str| Ok(()))?,
    };

    let license = match prefilled.license {
        Some(license) => license,
        None => {
            let licenses = License::all();
            let items: Vec<String> = licenses
                .iter()
                .map(|l| format!("{:<14} {}", l.as_str(), l.description()))
                .collect();
            let default = licenses
                .iter()
                .position(|l| *l == License::default())
                .unwrap_or(0);
            let index = prompter.select("License", &items, default)?;
            licenses.get(index).copied().unwrap_or_default()
        }
    };

    Ok(Answers::new(&name, description, license)?)
}

fn name_validator(input: &str) -> std::result::Result<(), String> {
    match validate_project_name(input) {
        Ok(_) => Ok(()),
        Err(kindle_core::Error::InvalidProjectName { reason, .. }) => Err(reason),
        Err(e) => Err(e.to_string()),
    }
}
