use super::{Demo, DemoContext};
use crate::error::Result;
use log::{Level, Log, Metadata, Record};

const LEVELS: [Level; 5] = [Level::Error, Level::Warn, Level::Info, Level::Debug, Level::Trace];

/// A logger that drops every record.
pub struct DiscardLogger;

impl Log for DiscardLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        false
    }

    fn log(&self, _record: &Record) {}

    fn flush(&self) {}
}

pub struct DiscardLogDemo;

impl Demo for DiscardLogDemo {
    fn name(&self) -> &'static str {
        "discard-log"
    }

    fn title(&self) -> &'static str {
        "Discarding logger"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let logger = DiscardLogger;
        let any_enabled = LEVELS.iter().any(|level| {
            logger.enabled(&Metadata::builder().level(*level).target("showcase").build())
        });
        logger.log(
            &Record::builder()
                .args(format_args!("this record goes nowhere"))
                .level(Level::Info)
                .target("showcase")
                .build(),
        );
        logger.flush();

        Ok(vec![
            format!("DiscardLogger enabled for any level: {any_enabled}"),
            "DiscardLogger accepted one record and wrote nothing.".to_string(),
        ])
    }
}
