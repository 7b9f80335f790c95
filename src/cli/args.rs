use crate::constants::{exit_codes, verbosity};
use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for showcase.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Tour arguments used when no subcommand is given.
    #[command(flatten)]
    pub run: RunArgs,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (`.json`, `.yaml` or `.yml`). Defaults to `showcase.*` in the working directory.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The command to execute. Without a subcommand the tour runs, and tour
    /// arguments given before `run` are merged into it.
    pub fn into_command(self) -> Commands {
        match self.command {
            None => Commands::Run(self.run),
            Some(Commands::Run(args)) => Commands::Run(self.run.merge(args)),
            Some(other) => other,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the tour (the default when no subcommand is given).
    Run(RunArgs),
    /// List the available demos in tour order.
    List,
    /// Render an inclusive integer sequence through the template engine.
    #[command(allow_negative_numbers = true)]
    Seq(SeqArgs),
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Demos to run. All demos run when none are given.
    #[arg(value_name = "DEMO")]
    pub demos: Vec<String>,

    /// Demos to skip (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Seed for the `random` demo.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RunArgs {
    /// Combines two argument sets. Demo and skip lists are concatenated and
    /// `other`'s seed wins.
    pub fn merge(mut self, other: RunArgs) -> RunArgs {
        self.demos.extend(other.demos);
        self.skip.extend(other.skip);
        self.seed = other.seed.or(self.seed);
        self
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct SeqArgs {
    /// First number of the sequence.
    pub start: i64,

    /// Last number of the sequence (inclusive).
    pub end: i64,

    /// Text emitted before the numbers.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Text emitted after each number.
    #[arg(long)]
    pub separator: Option<String>,

    /// Longest sequence to accept.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_len: Option<u64>,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn parse_cli() -> Cli {
    let args: Vec<OsString> = std::env::args_os().collect();
    Cli::try_parse_from(&args).unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let help = subcommand_help(&args).unwrap_or_else(|| {
                Cli::command().help_template(HELP_TEMPLATE).render_help().to_string()
            });
            println!("{help}");
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Help text of the first subcommand named in `args`, if any.
pub fn subcommand_help<I, T>(args: I) -> Option<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    let mut command = Cli::command();
    command.build();
    let mut subcommand = args
        .into_iter()
        .skip(1)
        .find_map(|arg| command.find_subcommand(arg.as_ref()).cloned())?
        .help_template(HELP_TEMPLATE);
    Some(subcommand.render_help().to_string())
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
