//! The `AppendText` interface: values write their text form into a buffer
//! the caller owns, so several values can share one allocation.

use super::{Demo, DemoContext};
use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use std::fmt::{self, Display, Write};
use std::net::IpAddr;

pub trait AppendText {
    /// Appends the text form of `self` to `dst`.
    fn append_text(&self, dst: &mut String) -> Result<()>;
}

impl<T: Display + ?Sized> AppendText for T {
    fn append_text(&self, dst: &mut String) -> Result<()> {
        write!(dst, "{self}")?;
        Ok(())
    }
}

/// Appends `value` to a fresh buffer.
pub fn append_to_new<T: AppendText + ?Sized>(value: &T) -> Result<String> {
    let mut buf = String::new();
    value.append_text(&mut buf)?;
    Ok(buf)
}

#[derive(Debug, Clone, Copy)]
pub struct DemoStruct {
    pub value: i32,
}

impl Display for DemoStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "demoStruct({})", self.value)
    }
}

/// A UTC timestamp whose text form is RFC 3339.
pub struct Rfc3339(pub DateTime<Utc>);

impl Display for Rfc3339 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

pub struct TextAppendDemo;

impl Demo for TextAppendDemo {
    fn name(&self) -> &'static str {
        "text-append"
    }

    fn title(&self) -> &'static str {
        "Text append interface"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let first = DemoStruct { value: 123 };
        let mut shared = String::from("shared buffer: ");
        first.append_text(&mut shared)?;
        shared.push_str(", ");
        DemoStruct { value: 456 }.append_text(&mut shared)?;

        Ok(vec![format!("Encoding append result: {}", append_to_new(&first)?), shared])
    }
}

pub struct IpAppendDemo;

impl Demo for IpAppendDemo {
    fn name(&self) -> &'static str {
        "ip-append"
    }

    fn title(&self) -> &'static str {
        "IP address text append"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let addr: IpAddr = "192.0.2.1".parse()?;
        Ok(vec![format!("IpAddr appended text: {}", append_to_new(&addr)?)])
    }
}

pub struct RegexAppendDemo;

impl Demo for RegexAppendDemo {
    fn name(&self) -> &'static str {
        "regex-append"
    }

    fn title(&self) -> &'static str {
        "Regex text append"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let re = Regex::new("a*b")?;
        Ok(vec![format!("Regex appended text: {}", append_to_new(&re)?)])
    }
}

pub struct BigIntAppendDemo;

impl Demo for BigIntAppendDemo {
    fn name(&self) -> &'static str {
        "bigint-append"
    }

    fn title(&self) -> &'static str {
        "128-bit integer text append"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let big: u128 = "12345678901234567890".parse()?;
        Ok(vec![format!("u128 appended text: {}", append_to_new(&big)?)])
    }
}

pub struct TimeAppendDemo;

impl Demo for TimeAppendDemo {
    fn name(&self) -> &'static str {
        "time-append"
    }

    fn title(&self) -> &'static str {
        "Time text append"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let now = Rfc3339(Utc::now());
        Ok(vec![format!("DateTime<Utc> appended text: {}", append_to_new(&now)?)])
    }
}
