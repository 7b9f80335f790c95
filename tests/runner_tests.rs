use showcase::cli::{RunArgs, Runner, SeqArgs};
use showcase::config::TourConfig;
use showcase::demos::{Demo, DemoContext, Registry};
use showcase::error::{Error, Result};
use test_log::test;

struct FailingDemo;

impl Demo for FailingDemo {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn title(&self) -> &'static str {
        "Always fails"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        Err(Error::ConfigValidation("boom".to_string()))
    }
}

fn run_to_string(runner: &Runner, args: &RunArgs) -> (String, showcase::cli::TourSummary) {
    let mut out = Vec::new();
    let summary = runner.run_tour(args, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

fn args(demos: &[&str]) -> RunArgs {
    RunArgs { demos: demos.iter().map(|d| d.to_string()).collect(), ..Default::default() }
}

#[test]
fn full_tour_runs_every_demo() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let (output, summary) = run_to_string(&runner, &RunArgs::default());

    assert_eq!(summary.ran, Registry::builtin().len());
    assert!(summary.failed.is_empty(), "failed demos: {:?}", summary.failed);
    assert!(output.starts_with("=== Feature Tour ===\n"));
    assert!(output.ends_with("=== Feature Tour End ===\n"));
    assert!(output.contains("Template output: Numbers: 1 2 3 4 5 \n"));
    assert!(output.contains("Regex appended text: a*b\n"));
    assert!(output.contains("  key=key2, value=200\n"));
}

#[test]
fn selected_demos_run_in_tour_order() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let (output, summary) = run_to_string(&runner, &args(&["template", "generic-alias"]));
    assert_eq!(summary.ran, 2);
    assert_eq!(
        output,
        "=== Feature Tour ===\n\
         Generic type alias (MySlice<i32>): [1, 2, 3, 4, 5]\n\
         Template output: Numbers: 1 2 3 4 5 \n\
         === Feature Tour End ===\n"
    );
}

#[test]
fn config_and_cli_skip_lists_are_combined() {
    let config = TourConfig { skip: vec!["random".to_string()], ..Default::default() };
    let runner = Runner::new(config, Registry::builtin());
    let run_args = RunArgs { skip: vec!["hash".to_string()], ..Default::default() };
    let (output, summary) = run_to_string(&runner, &run_args);
    assert_eq!(summary.ran, Registry::builtin().len() - 2);
    assert!(!output.contains("Random number"));
    assert!(!output.contains("Hash for key"));
}

#[test]
fn seed_flag_makes_random_demo_repeatable() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let run_args = RunArgs { seed: Some(99), ..args(&["random"]) };
    let (first, _) = run_to_string(&runner, &run_args);
    let (second, _) = run_to_string(&runner, &run_args);
    assert_eq!(first, second);
    assert!(first.contains("StdRng from seed 99"));
}

#[test]
fn failing_demo_does_not_stop_the_tour() {
    let mut registry = Registry::empty();
    registry.register(Box::new(FailingDemo));
    registry.register(Box::new(showcase::demos::language::GenericAliasDemo));
    let runner = Runner::new(TourConfig::default(), registry);

    let (output, summary) = run_to_string(&runner, &RunArgs::default());
    assert_eq!(summary.ran, 2);
    assert_eq!(summary.failed, vec!["failing".to_string()]);
    assert!(output.contains("Always fails error: Configuration validation failed: boom\n"));
    assert!(output.contains("Generic type alias (MySlice<i32>): [1, 2, 3, 4, 5]\n"));
}

#[test]
fn unknown_demo_is_rejected_before_running() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let mut out = Vec::new();
    let result = runner.run_tour(&args(&["does-not-exist"]), &mut out);
    assert!(matches!(result, Err(Error::UnknownDemo { .. })));
    assert!(out.is_empty());
}

#[test]
fn list_prints_every_demo() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let mut out = Vec::new();
    runner.list(&mut out).unwrap();
    let output = String::from_utf8(out).unwrap();
    assert_eq!(output.lines().count(), Registry::builtin().len());
    assert!(output.lines().next().unwrap().starts_with("generic-alias"));
}

#[test]
fn seq_command_uses_config_defaults() {
    let mut config = TourConfig::default();
    config.sequence.separator = ",".to_string();
    let runner = Runner::new(config, Registry::builtin());
    let seq_args =
        SeqArgs { start: -1, end: 1, prefix: None, separator: None, max_len: None };
    let mut out = Vec::new();
    runner.seq(&seq_args, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Numbers: -1,0,1,\n");
}

#[test]
fn seq_command_reports_out_of_range() {
    let runner = Runner::new(TourConfig::default(), Registry::builtin());
    let seq_args = SeqArgs {
        start: 1,
        end: 100,
        prefix: Some("n: ".to_string()),
        separator: None,
        max_len: Some(10),
    };
    let mut out = Vec::new();
    assert!(matches!(runner.seq(&seq_args, &mut out), Err(Error::OutOfRange { .. })));
    assert!(out.is_empty());
}
