mod cli;

use anyhow::{Context, Result};
use cli::{Cli, Commands};
use log::{debug, error};
use std::io::{self, Read};
use std::path::Path;

use case_cycle::config::Config;
use case_cycle::convention::describe;
use case_cycle::engine::detect;
use case_cycle::pipeline::{init_config, EditAction, Pipeline};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let level = if cli.verbose { "debug" } else { "info" };
    let _logger = flexi_logger::Logger::try_with_env_or_str(level)?.start()?;

    run(cli).inspect_err(|err| error!("case-cycle failed: {:#}", err))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { output, force } => run_init(&output, force),
        command => {
            let config = Config::load_or_default(cli.config.as_deref())?;
            debug!("Using configuration: {:?}", config);
            run_command(command, &Pipeline::new(config))
        }
    }
}

/// Run a command that operates on text
fn run_command(command: Commands, pipeline: &Pipeline) -> Result<()> {
    match command {
        Commands::Convert { to, text } => {
            for piece in collect_input(text, pipeline)? {
                println!("{}", pipeline.convert(&piece, to));
            }
        }
        Commands::Cycle { text } => {
            for piece in collect_input(text, pipeline)? {
                println!("{}", pipeline.cycle(&piece).output);
            }
        }
        Commands::Detect { text } => {
            for piece in collect_input(text, pipeline)? {
                println!("{}", describe(detect(&piece)));
            }
        }
        Commands::Edit {
            file,
            to,
            cycle,
            at,
        } => {
            let action = if cycle {
                EditAction::Cycle
            } else {
                EditAction::Convert(to)
            };
            pipeline.edit_file(&file, action, &at)?;
        }
        Commands::Init { output, force } => run_init(&output, force)?,
    }

    Ok(())
}

/// Text given on the command line, or stdin when none is given
fn collect_input(text: Vec<String>, pipeline: &Pipeline) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(pipeline.prepare(text));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;

    Ok(pipeline.split_input(&buffer))
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    init_config(output_path, force)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - convert.default_target: Convention used when --to is omitted");
    println!("  - input.split_lines: Convert each stdin line separately");
    println!("  - output.notify: Report the detected and next convention when cycling");
    println!("  - document.word_chars: Extra characters that belong to a word");

    Ok(())
}
