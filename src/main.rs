//! flaskgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration acquisition,
//! project generation and the final report.

use std::io::Read;

use flaskgen::{
    cli::{get_args, Command, CreateArgs},
    config::{parse_answers, Answers, Configuration},
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::{generate, Generated},
    prompt::{collect_configuration, DialoguerPrompter, Prompter},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    match args.command {
        Command::Create(create_args) => {
            init_logger(create_args.verbose);
            if let Err(err) = run(create_args) {
                default_error_handler(err);
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Resolves the configuration from stdin answers, command line arguments or,
/// when neither names a project, interactive prompts.
fn get_configuration(args: &CreateArgs, prompt: &dyn Prompter) -> Result<Configuration> {
    if !args.is_non_interactive() {
        println!("Creating a new Flask project\n");
        return collect_configuration(prompt);
    }

    let answers = if args.stdin {
        parse_answers(&read_stdin()?)?
    } else {
        Answers::default()
    };
    let answers = answers.with_overrides(args.answers());
    let config = answers.into_configuration()?;

    println!("Creating Flask project '{}' with:", config.name);
    println!("  type: {}", config.archetype);
    println!("  structure: {}", config.structure);
    let features: Vec<&str> = config.features.iter().map(|f| f.as_str()).collect();
    println!("  features: [{}]", features.join(", "));
    Ok(config)
}

fn print_next_steps(generated: &Generated) {
    println!("\nNext steps:");
    println!("  cd {}", generated.root.display());
    println!("  pip install -r requirements.txt");
    println!("  flask run");
}

/// Main application logic execution.
///
/// # Flow
/// 1. Acquires the project configuration
/// 2. Generates the project below the output directory
/// 3. Reports the created files and the next steps
fn run(args: CreateArgs) -> Result<()> {
    let prompt = DialoguerPrompter::new();
    let config = get_configuration(&args, &prompt)?;

    println!("\nCreating project...");
    let generated = generate(&config, &args.output_dir)?;

    for dir in &generated.directories {
        println!("created: '{}'", dir.display());
    }
    for file in &generated.files {
        println!("created: '{}'", file.display());
    }

    println!("Project '{}' created successfully.", generated.config.name);
    print_next_steps(&generated);
    Ok(())
}
