//! CLI Adapter.

mod form;
mod results;

use crate::app::Notice;
use crate::app::api::{self, ViewOutcome};
use crate::domain::{AppError, Mode, PERSONA_PRESETS, ReturnFormat, Tone, View};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prompteng")]
#[command(version)]
#[command(
    about = "Turn a rough idea into engineered prompts via a prompt-refinement backend",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which view a location resolves to
    View {
        /// Location to resolve (e.g. "/?view=prompt"); defaults to "/"
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Enter the working view
    #[clap(visible_alias = "s")]
    Start {
        /// Current location; defaults to "/"
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Return to the landing view
    Back {
        /// Current location; defaults to "/?view=prompt"
        #[arg(short, long)]
        location: Option<String>,
    },
    /// Show the current form state
    #[clap(visible_alias = "f")]
    Form,
    /// Edit form fields (each edit is saved immediately)
    Set {
        #[command(flatten)]
        fields: form::FieldArgs,
    },
    /// Submit the form and show the generated prompts
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        fields: form::FieldArgs,
    },
    /// Show the last generated prompts
    #[clap(visible_alias = "r")]
    Results {
        /// Include stored explanations
        #[arg(short, long)]
        explanations: bool,
    },
    /// Copy one prompt to the clipboard
    #[clap(visible_alias = "c")]
    Copy {
        /// Prompt id as shown in results
        id: String,
    },
    /// Copy all prompts to the clipboard, separated by "---"
    CopyAll,
    /// Ask the backend to explain one prompt and store the explanation
    Explain {
        /// Prompt id as shown in results
        id: String,
    },
    /// List available modes, tones, personas, and formats
    Options,
}

/// Entry point for the CLI.
pub fn run() {
    crate::app::logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::View { location } => api::view(location.as_deref()).map(print_view),
        Commands::Start { location } => api::start(location.as_deref()).map(print_view),
        Commands::Back { location } => {
            let location = location.unwrap_or_else(|| "/?view=prompt".to_string());
            api::back(Some(&location)).map(print_view)
        }
        Commands::Form => api::form().map(|state| form::print_form(&state)),
        Commands::Set { fields } => form::run_set(fields),
        Commands::Generate { fields } => form::run_generate(fields),
        Commands::Results { explanations } => results::run_results(explanations),
        Commands::Copy { id } => results::run_copy(&id),
        Commands::CopyAll => results::run_copy_all(),
        Commands::Explain { id } => results::run_explain(&id),
        Commands::Options => {
            print_options();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", Notice::from_error(&e));
        std::process::exit(1);
    }
}

fn print_view(outcome: ViewOutcome) {
    match outcome.view {
        View::Landing => println!("View: landing"),
        View::Working => println!("View: working"),
    }
    println!("Location: {}", outcome.location);
}

fn print_options() {
    println!("Modes:");
    for mode in Mode::ALL {
        println!("  {:<10} {}", mode.as_str(), mode.label());
    }
    println!("Tones:");
    for tone in Tone::ALL {
        println!("  {:<10} {}", tone.as_str(), tone.label());
    }
    println!("Personas:");
    for (key, label, _) in PERSONA_PRESETS {
        println!("  {:<20} {}", key, label);
    }
    println!("Formats:");
    for format in ReturnFormat::ALL {
        println!("  {:<10} {}", format.as_str(), format.label());
    }
}
