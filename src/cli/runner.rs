use crate::{
    cli::{Cli, Commands, RunArgs, SeqArgs},
    config::TourConfig,
    constants::{TOUR_FOOTER, TOUR_HEADER},
    demos::{DemoContext, Registry},
    error::Result,
    renderer::SequenceRenderer,
};
use log::{debug, error, info};
use std::io::Write;

/// Outcome of a tour run.
#[derive(Debug, Default, PartialEq)]
pub struct TourSummary {
    /// Number of demos that were started.
    pub ran: usize,
    /// Names of the demos that returned an error.
    pub failed: Vec<String>,
}

/// Runs demos from a registry with one configuration
pub struct Runner {
    config: TourConfig,
    registry: Registry,
}

impl Runner {
    pub fn new(config: TourConfig, registry: Registry) -> Self {
        Self { config, registry }
    }

    /// Runs the selected demos in tour order, writing their output to `out`.
    ///
    /// A failing demo is reported inline and the tour continues.
    pub fn run_tour<W: Write>(&self, args: &RunArgs, out: &mut W) -> Result<TourSummary> {
        let skip: Vec<String> = args.skip.iter().chain(&self.config.skip).cloned().collect();
        let selected = self.registry.select(&args.demos, &skip)?;

        let mut config = self.config.clone();
        if let Some(seed) = args.seed {
            config.random.seed = Some(seed);
        }
        let ctx = DemoContext::new(config);

        writeln!(out, "{TOUR_HEADER}")?;
        let mut summary = TourSummary::default();
        for demo in selected {
            debug!("Running demo '{}'", demo.name());
            summary.ran += 1;
            match demo.run(&ctx) {
                Ok(lines) => {
                    for line in lines {
                        writeln!(out, "{line}")?;
                    }
                }
                Err(e) => {
                    error!("Demo '{}' failed: {e}", demo.name());
                    writeln!(out, "{} error: {e}", demo.title())?;
                    summary.failed.push(demo.name().to_string());
                }
            }
        }
        writeln!(out, "{TOUR_FOOTER}")?;

        info!("Tour finished: {} demos run, {} failed", summary.ran, summary.failed.len());
        Ok(summary)
    }

    /// Writes one `name  title` line per demo.
    pub fn list<W: Write>(&self, out: &mut W) -> Result<()> {
        for demo in self.registry.iter() {
            writeln!(out, "{:<16} {}", demo.name(), demo.title())?;
        }
        Ok(())
    }

    /// Renders a sequence, falling back to the configured prefix, separator and limit.
    pub fn seq<W: Write>(&self, args: &SeqArgs, out: &mut W) -> Result<()> {
        let defaults = &self.config.sequence;
        let renderer =
            SequenceRenderer::with_max_len(args.max_len.unwrap_or(defaults.max_len));
        let rendered = renderer.render(
            args.prefix.as_deref().unwrap_or(&defaults.prefix),
            args.start,
            args.end,
            args.separator.as_deref().unwrap_or(&defaults.separator),
        )?;
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    let search_dir = std::env::current_dir()?;
    let config = TourConfig::load(cli.config.as_deref(), &search_dir)?;
    let runner = Runner::new(config, Registry::builtin());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.into_command() {
        Commands::Run(args) => runner.run_tour(&args, &mut out).map(|_| ()),
        Commands::List => runner.list(&mut out),
        Commands::Seq(args) => runner.seq(&args, &mut out),
    }
}
