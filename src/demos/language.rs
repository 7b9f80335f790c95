use super::{Demo, DemoContext};
use crate::error::Result;

/// A generic type alias.
pub type MySlice<T> = Vec<T>;

pub struct GenericAliasDemo;

impl Demo for GenericAliasDemo {
    fn name(&self) -> &'static str {
        "generic-alias"
    }

    fn title(&self) -> &'static str {
        "Generic type alias"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let numbers: MySlice<i32> = vec![1, 2, 3, 4, 5];
        Ok(vec![format!("Generic type alias (MySlice<i32>): {numbers:?}")])
    }
}

pub struct IteratorsDemo;

/// Non-empty lines of a byte buffer.
pub fn byte_lines(text: &[u8]) -> impl Iterator<Item = &[u8]> {
    text.split(|b| *b == b'\n').filter(|line| !line.is_empty())
}

impl Demo for IteratorsDemo {
    fn name(&self) -> &'static str {
        "iterators"
    }

    fn title(&self) -> &'static str {
        "Byte and string iterators"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let mut lines = vec!["Iterating over lines (split on b'\\n'):".to_string()];
        lines.extend(
            byte_lines(b"line1\nline2\nline3\n")
                .map(|line| String::from_utf8_lossy(line).into_owned()),
        );

        lines.push("Iterating over fields (split_whitespace):".to_string());
        lines.extend("  foo   bar baz  ".split_whitespace().map(str::to_string));
        Ok(lines)
    }
}
