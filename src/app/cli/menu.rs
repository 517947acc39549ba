//! Interactive main menu, shown when no subcommand is given on a terminal.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Error as DialoguerError, Input, Select};

use super::output;
use crate::app::api::{self, BuildOptions, Interaction, UseOptions};
use crate::app::commands::catalog::group_by_category;
use crate::app::commands::export::default_export_path;
use crate::domain::{AppError, Destination, PromptStyle, RenderedPrompt, TemplateSummary};

const MENU_BACK_OPTION: &str = "[back]";

#[derive(Clone, Copy)]
enum MenuAction {
    UseTemplate,
    Build,
    List,
    Search,
    Export,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::UseTemplate,
        MenuAction::Build,
        MenuAction::List,
        MenuAction::Search,
        MenuAction::Export,
        MenuAction::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::UseTemplate => "Use a template",
            MenuAction::Build => "Build a structured prompt",
            MenuAction::List => "List templates",
            MenuAction::Search => "Search templates",
            MenuAction::Export => "Export catalog to Markdown",
            MenuAction::Quit => "Quit",
        }
    }
}

pub(super) fn run_menu() -> Result<(), AppError> {
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|action| action.label()).collect();
    loop {
        let selection = Select::new()
            .with_prompt("promptgen")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?;

        let Some(index) = selection else {
            return Ok(());
        };

        let result = match MenuAction::ALL[index] {
            MenuAction::UseTemplate => use_template(),
            MenuAction::Build => build(),
            MenuAction::List => list(),
            MenuAction::Search => search(),
            MenuAction::Export => export(),
            MenuAction::Quit => return Ok(()),
        };

        match result {
            Ok(()) => {}
            Err(AppError::Interrupted) => return Err(AppError::Interrupted),
            Err(err) => eprintln!("Error: {}", err),
        }
        println!();
    }
}

fn use_template() -> Result<(), AppError> {
    let summaries = api::list_templates(None)?;
    let Some(id) = select_template(&summaries)? else {
        return Ok(());
    };

    let options = UseOptions {
        template_id: id,
        assignments: Vec::new(),
        files: Vec::new(),
        interaction: Interaction::detect(false),
    };
    let rendered = api::use_template(&options)?;
    deliver(&rendered)
}

fn build() -> Result<(), AppError> {
    let labels: Vec<String> = PromptStyle::ALL
        .iter()
        .map(|style| format!("{} ({})", style.label(), style.name()))
        .collect();
    let Some(index) = Select::new()
        .with_prompt("Select style")
        .items(&labels)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?
    else {
        return Ok(());
    };

    let options = BuildOptions {
        style: PromptStyle::ALL[index],
        interaction: Interaction::detect(false),
        ..Default::default()
    };
    let rendered = api::build_prompt(&options)?;
    deliver(&rendered)
}

fn list() -> Result<(), AppError> {
    print!("{}", output::format_listing(&api::list_templates(None)?));
    Ok(())
}

fn search() -> Result<(), AppError> {
    let Some(keyword) = read_text("Keyword", None)? else {
        return Ok(());
    };
    let hits = api::search_templates(&keyword)?;
    if hits.is_empty() {
        println!("No templates match '{}'", keyword);
    }
    for hit in &hits {
        println!("  {:<22} [{}] {}", hit.id, hit.category, hit.name);
    }
    Ok(())
}

fn export() -> Result<(), AppError> {
    let default = default_export_path(chrono::Local::now()).display().to_string();
    let Some(path) = read_text("Export to", Some(default))? else {
        return Ok(());
    };
    let path = api::export_catalog(Some(PathBuf::from(path)))?;
    println!("✅ Exported catalog to {}", path.display());
    Ok(())
}

fn select_template(summaries: &[TemplateSummary]) -> Result<Option<String>, AppError> {
    let by_category = group_by_category(summaries);
    let categories: Vec<&str> = by_category.keys().copied().collect();

    loop {
        let Some(category_index) = Select::new()
            .with_prompt("Select category")
            .items(&categories)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
        else {
            return Ok(None);
        };

        let Some(entries) = by_category.get(categories[category_index]) else {
            continue;
        };
        let mut items: Vec<String> =
            entries.iter().map(|entry| format!("{}: {}", entry.id, entry.description)).collect();
        items.push(MENU_BACK_OPTION.to_string());

        let Some(template_index) = Select::new()
            .with_prompt("Select template")
            .items(&items)
            .default(0)
            .interact_opt()
            .map_err(prompt_error)?
        else {
            return Ok(None);
        };

        if template_index == items.len() - 1 {
            continue;
        }
        return Ok(Some(entries[template_index].id.clone()));
    }
}

fn deliver(rendered: &RenderedPrompt) -> Result<(), AppError> {
    let choices = ["Print", "Save to file", "Copy to clipboard"];
    let Some(choice) = Select::new()
        .with_prompt("Output")
        .items(&choices)
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?
    else {
        return Ok(());
    };

    let destination = match choice {
        0 => Destination::Stdout,
        1 => {
            let default = default_prompt_path(&rendered.template_id);
            let Some(path) = read_text("File path", Some(default))? else {
                return Ok(());
            };
            Destination::from_flags(Some(PathBuf::from(path)), false, false)
        }
        _ => Destination::Clipboard,
    };

    if destination == Destination::Stdout {
        println!();
    }
    output::report(&api::deliver(rendered, &destination)?);
    Ok(())
}

/// `prompt_<template id>.md`, with characters unsafe in file names replaced.
fn default_prompt_path(template_id: &str) -> String {
    let stem: String = template_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("prompt_{stem}.md")
}

fn read_text(prompt: &str, default: Option<String>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(prompt_error(err)),
    }
}

fn prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(err) if err.kind() == ErrorKind::Interrupted => AppError::Interrupted,
        DialoguerError::IO(err) => AppError::Io(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_path_is_named_after_template() {
        assert_eq!(default_prompt_path("code-review"), "prompt_code-review.md");
        assert_eq!(default_prompt_path("build:xml"), "prompt_build_xml.md");
    }
}
