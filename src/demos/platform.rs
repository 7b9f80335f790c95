use super::{Demo, DemoContext};
use crate::error::Result;

pub struct PlatformDemo;

impl Demo for PlatformDemo {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn title(&self) -> &'static str {
        "Target platform"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        use std::env::consts::{ARCH, FAMILY, OS};
        Ok(vec![
            format!("Target platform: {OS}/{ARCH} ({FAMILY})"),
            "Note: query the toolchain location with `rustc --print sysroot`.".to_string(),
        ])
    }
}
