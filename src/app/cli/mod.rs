//! CLI Adapter.

mod menu;
mod output;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::app::api::{self, BuildOptions, Interaction, UseOptions};
use crate::app::logging;
use crate::domain::{AppError, Destination, PromptOutline, PromptStyle};

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(version)]
#[command(
    about = "Generate LLM prompts from built-in templates",
    long_about = "Pick a template, fill its slots, and print, save, or copy the prompt.\n\
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in templates grouped by category
    #[clap(visible_aliases = ["ls", "l"])]
    List {
        /// Only show templates in this category
        #[arg(long)]
        category: Option<String>,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Search templates by keyword
    #[clap(visible_aliases = ["find", "s"])]
    Search {
        /// Keyword(s) matched against id, name, category, description, and body
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// Show a template's slots and body
    Show {
        /// Template id
        id: String,
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Render a template
    #[clap(visible_alias = "u")]
    Use {
        /// Template id
        id: String,
        /// Slot values as KEY=VALUE, used verbatim
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,
        /// Read a slot value from a file (repeatable)
        #[arg(short = 'f', long = "file", value_name = "KEY=PATH")]
        files: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Assemble a structured prompt from role/context/task sections
    #[clap(visible_aliases = ["b", "new"])]
    Build {
        /// Layout: xml, markdown, or plain
        #[arg(long, default_value_t = PromptStyle::Xml)]
        style: PromptStyle,
        /// Role the model should take
        #[arg(long)]
        role: Option<String>,
        /// Background information
        #[arg(long)]
        context: Option<String>,
        /// What the model should do
        #[arg(long)]
        task: Option<String>,
        /// Expected output format
        #[arg(long)]
        format: Option<String>,
        /// Extra constraints
        #[arg(long)]
        constraints: Option<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Export the whole catalog as Markdown
    #[clap(visible_alias = "e")]
    Export {
        /// Destination file (default: prompt-templates-YYYYMMDD.md)
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write the prompt to a file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH", conflicts_with = "clipboard")]
    output: Option<PathBuf>,
    /// Append to the output file instead of overwriting it
    #[arg(long, requires = "output")]
    append: bool,
    /// Copy the prompt to the system clipboard
    #[arg(short = 'c', long)]
    clipboard: bool,
    /// Never prompt; fail when a required value is missing
    #[arg(long, env = "PROMPTGEN_NO_INPUT", value_parser = FalseyValueParser::new())]
    no_input: bool,
}

impl OutputArgs {
    fn destination(&self) -> Destination {
        Destination::from_flags(self.output.clone(), self.append, self.clipboard)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Some(command) => dispatch(command),
        None if std::io::stdin().is_terminal() => menu::run_menu(),
        None => Cli::command().print_help().map_err(AppError::from),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn dispatch(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::List { category, json } => run_list(category.as_deref(), json),
        Commands::Search { keywords } => run_search(&keywords.join(" ")),
        Commands::Show { id, json } => run_show(&id, json),
        Commands::Use { id, assignments, files, output } => {
            run_use(id, assignments, files, &output)
        }
        Commands::Build { style, role, context, task, format, constraints, output } => {
            let outline = PromptOutline { role, context, task, format, constraints };
            run_build(style, outline, &output)
        }
        Commands::Export { output } => run_export(output),
    }
}

fn run_list(category: Option<&str>, json: bool) -> Result<(), AppError> {
    let summaries = api::list_templates(category)?;
    if json {
        println!("{}", output::to_json("template list", &summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No templates in category '{}'", category.unwrap_or_default());
        return Ok(());
    }
    print!("{}", output::format_listing(&summaries));
    Ok(())
}

fn run_search(keyword: &str) -> Result<(), AppError> {
    let hits = api::search_templates(keyword)?;
    if hits.is_empty() {
        println!("No templates match '{}'", keyword);
        return Ok(());
    }

    println!("Found {} template(s) matching '{}':", hits.len(), keyword);
    for hit in &hits {
        println!("  {:<22} [{}] {}", hit.id, hit.category, hit.name);
    }
    Ok(())
}

fn run_show(id: &str, json: bool) -> Result<(), AppError> {
    let detail = api::show_template(id)?;
    if json {
        println!("{}", output::to_json("template", &detail)?);
    } else {
        print!("{}", output::format_detail(&detail));
    }
    Ok(())
}

fn run_use(
    id: String,
    assignments: Vec<String>,
    files: Vec<String>,
    args: &OutputArgs,
) -> Result<(), AppError> {
    let options = UseOptions {
        template_id: id,
        assignments,
        files,
        interaction: Interaction::detect(args.no_input),
    };
    let rendered = api::use_template(&options)?;
    output::report(&api::deliver(&rendered, &args.destination())?);
    Ok(())
}

fn run_build(style: PromptStyle, outline: PromptOutline, args: &OutputArgs) -> Result<(), AppError> {
    let options = BuildOptions { style, outline, interaction: Interaction::detect(args.no_input) };
    let rendered = api::build_prompt(&options)?;
    output::report(&api::deliver(&rendered, &args.destination())?);
    Ok(())
}

fn run_export(output: Option<PathBuf>) -> Result<(), AppError> {
    let path = api::export_catalog(output)?;
    println!("✅ Exported catalog to {}", path.display());
    Ok(())
}
