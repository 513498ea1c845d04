//! Command-line interface implementation for flaskgen.
//! Provides argument parsing and help text formatting using clap.

use crate::config::Answers;
use clap::{error::ErrorKind, Args as ClapArgs, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for flaskgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "flaskgen: Flask project scaffolding tool", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the standard Flask folders and files
    Create(CreateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    /// Project name. Without it the configuration is collected interactively
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Application type: hello, webapp, api or fullstack
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub archetype: Option<String>,

    /// Project structure: simple, standard or blueprint
    #[arg(short, long)]
    pub structure: Option<String>,

    /// Comma separated features: database, auth, forms, env
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub features: Option<Vec<String>>,

    /// Directory in which the project directory is created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Read answers (JSON or YAML) from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CreateArgs {
    /// True when the configuration is given on the command line rather than
    /// collected interactively.
    pub fn is_non_interactive(&self) -> bool {
        self.stdin || self.name.is_some()
    }

    /// Answers given as arguments; they take precedence over answers read
    /// from stdin.
    pub fn answers(&self) -> Answers {
        Answers {
            name: self.name.clone(),
            archetype: self.archetype.clone(),
            structure: self.structure.clone(),
            features: self.features.clone(),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if no command is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::MissingRequiredArgument
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
