use super::{Demo, DemoContext};
use crate::error::Result;
use log::warn;

pub struct TemplateDemo;

impl Demo for TemplateDemo {
    fn name(&self) -> &'static str {
        "template"
    }

    fn title(&self) -> &'static str {
        "Template range over an integer sequence"
    }

    fn run(&self, ctx: &DemoContext) -> Result<Vec<String>> {
        let sequence = &ctx.config.sequence;
        if sequence.start > sequence.end {
            warn!(
                "Sequence start {} is after end {}, rendering an empty sequence",
                sequence.start, sequence.end
            );
        }
        let output = ctx.sequence.render(
            &sequence.prefix,
            sequence.start,
            sequence.end,
            &sequence.separator,
        )?;
        Ok(vec![format!("Template output: {output}")])
    }
}
