use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::debug;
use rpn_calc::cli::{self, AppError, BatchStatus};
use rpn_calc::format::MAX_DEPTH;
use rpn_calc::{Calculator, ShellConfig};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

fn command() -> Command {
    Command::new("rpn-calc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reverse Polish Notation calculator")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Script files to evaluate in order")
                .value_parser(value_parser!(PathBuf))
                .num_args(1..)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .help("Script file to evaluate (can be used multiple times)")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .value_name("EXPR")
                .help("Expression to evaluate (can be used multiple times)")
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Enter the interactive REPL after expressions and files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print one JSON record per token and the final stack as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Display detailed execution information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .value_name("PROMPT")
                .help("REPL prompt"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .value_name("N")
                .help("Number of stack entries to display")
                .value_parser(value_parser!(u32).range(1..=MAX_DEPTH as i64)),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .value_name("FILE")
                .help("Readline history file")
                .value_parser(value_parser!(PathBuf)),
        )
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// Environment settings overridden by command-line flags
fn load_config(matches: &ArgMatches) -> ShellConfig {
    let mut config = ShellConfig::from_env();

    if let Some(prompt) = matches.get_one::<String>("prompt") {
        config.prompt = prompt.clone();
    }
    if let Some(depth) = matches.get_one::<u32>("depth") {
        config.depth = *depth as usize;
    }
    if let Some(history) = matches.get_one::<PathBuf>("history") {
        config.history = Some(history.clone());
    }
    if matches.get_flag("no-color") {
        config.color = false;
    }
    config.json = matches.get_flag("json");
    config.verbose = matches.get_flag("verbose");

    config
}

fn main() {
    let matches = command().get_matches();
    init_logging(matches.get_flag("verbose"));

    let config = load_config(&matches);
    if !config.color {
        colored::control::set_override(false);
    }
    if let Ok(json) = serde_json::to_string(&config) {
        debug!("config: {}", json);
    }

    if let Err(err) = run(&matches, &config) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches, config: &ShellConfig) -> Result<(), AppError> {
    let expressions: Vec<&String> = matches
        .get_many::<String>("expr")
        .map(|values| values.collect())
        .unwrap_or_default();
    let files: Vec<&PathBuf> = matches
        .get_many::<PathBuf>("file")
        .into_iter()
        .flatten()
        .chain(matches.get_many::<PathBuf>("files").into_iter().flatten())
        .collect();
    let interactive = matches.get_flag("interactive");

    let mut calc = Calculator::new();

    if expressions.is_empty() && files.is_empty() {
        return cli::run_interactive(&mut calc, config);
    }

    let status = run_batch(&mut calc, &expressions, &files, config)?;

    if interactive && !status.quit {
        return cli::run_interactive(&mut calc, config);
    }

    if status.failures > 0 {
        return Err(AppError::Failed(status.failures));
    }
    Ok(())
}

fn run_batch(
    calc: &mut Calculator,
    expressions: &[&String],
    files: &[&PathBuf],
    config: &ShellConfig,
) -> Result<BatchStatus, AppError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = BatchStatus::default();

    for expr in expressions {
        debug!("evaluating expression: {}", expr);
        status.merge(cli::run_source(calc, expr, config, &mut out)?);
        if status.quit {
            break;
        }
    }

    for path in files {
        if status.quit {
            break;
        }
        debug!("evaluating file {}", path.display());
        let source = fs::read_to_string(path)
            .map_err(|e| AppError::Other(format!("cannot read {}: {}", path.display(), e)))?;
        status.merge(cli::run_source(calc, &source, config, &mut out)?);
    }

    cli::write_final_stack(calc, config, &mut out)?;
    Ok(status)
}
