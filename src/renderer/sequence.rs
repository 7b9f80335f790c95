//! Rendering of inclusive integer sequences through the template engine.
//!
//! `render` expands `prefix`, then every integer of `start..=end` followed by
//! `separator`. A reversed range renders as the bare prefix. Ranges longer
//! than the configured maximum fail with [`Error::OutOfRange`].

use crate::{
    constants::sequence::{MAX_SEQUENCE_LEN, TEMPLATE, TEMPLATE_NAME},
    error::{Error, Result},
    renderer::{interface::TemplateRenderer, MiniJinjaRenderer},
};
use minijinja::ErrorKind;
use serde_json::json;

/// Number of integers in `start..=end`, zero when `start > end`.
pub fn sequence_len(start: i64, end: i64) -> u128 {
    if start > end {
        0
    } else {
        // Fits: at most 2^64
        (i128::from(end) - i128::from(start) + 1) as u128
    }
}

/// Fails with `OutOfRange` when `start..=end` holds more than `max` integers.
pub fn check_sequence_len(start: i64, end: i64, max: u64) -> Result<()> {
    if sequence_len(start, end) > u128::from(max) {
        return Err(Error::OutOfRange { start, end, max });
    }
    Ok(())
}

/// Builds the `seq(start, end)` template function.
pub fn seq_function(
    max_len: u64,
) -> impl Fn(i64, i64) -> Result<Vec<i64>, minijinja::Error> + Send + Sync + 'static {
    move |start, end| {
        check_sequence_len(start, end, max_len).map_err(|e| {
            minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string())
        })?;
        Ok((start..=end).collect())
    }
}

/// Sequence template renderer with a fixed maximum sequence length.
pub struct SequenceRenderer {
    engine: MiniJinjaRenderer,
    max_len: u64,
}

impl SequenceRenderer {
    pub fn new() -> Self {
        Self::with_max_len(MAX_SEQUENCE_LEN)
    }

    pub fn with_max_len(max_len: u64) -> Self {
        Self { engine: MiniJinjaRenderer::with_max_sequence_len(max_len), max_len }
    }

    pub fn max_len(&self) -> u64 {
        self.max_len
    }

    /// Renders `prefix` followed by each integer in `start..=end` and `separator`.
    ///
    /// # Returns
    /// * `Ok(String)` - The expanded text, exactly `prefix` for a reversed range
    /// * `Err(Error::OutOfRange)` - If the range is longer than the maximum
    pub fn render(
        &self,
        prefix: &str,
        start: i64,
        end: i64,
        separator: &str,
    ) -> Result<String> {
        check_sequence_len(start, end, self.max_len)?;
        let context = json!({
            "prefix": prefix,
            "start": start,
            "end": end,
            "separator": separator,
        });
        self.engine.render(TEMPLATE, &context, Some(TEMPLATE_NAME))
    }
}

impl Default for SequenceRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a sequence with the default maximum length.
pub fn render(prefix: &str, start: i64, end: i64, separator: &str) -> Result<String> {
    SequenceRenderer::new().render(prefix, start, end, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascending_range() {
        assert_eq!(render("Numbers: ", 1, 5, " ").unwrap(), "Numbers: 1 2 3 4 5 ");
    }

    #[test]
    fn reversed_range_renders_prefix_only() {
        assert_eq!(render("Numbers: ", 5, 1, " ").unwrap(), "Numbers: ");
    }

    #[test]
    fn single_element_range() {
        assert_eq!(render("Numbers: ", 0, 0, " ").unwrap(), "Numbers: 0 ");
    }

    #[test]
    fn negative_bounds() {
        assert_eq!(render("Numbers: ", -2, 2, " ").unwrap(), "Numbers: -2 -1 0 1 2 ");
    }

    #[test]
    fn custom_prefix_and_separator() {
        assert_eq!(render("", 1, 3, ", ").unwrap(), "1, 2, 3, ");
        assert_eq!(render("n=", 7, 8, "").unwrap(), "n=78");
    }

    #[test]
    fn sequence_len_handles_extreme_bounds() {
        assert_eq!(sequence_len(1, 5), 5);
        assert_eq!(sequence_len(5, 1), 0);
        assert_eq!(sequence_len(i64::MIN, i64::MAX), 1u128 << 64);
    }

    #[test]
    fn oversize_range_is_out_of_range() {
        let renderer = SequenceRenderer::with_max_len(10);
        assert!(renderer.render("", 1, 10, " ").is_ok());
        match renderer.render("", 1, 11, " ") {
            Err(Error::OutOfRange { start, end, max }) => {
                assert_eq!((start, end, max), (1, 11, 10));
            }
            other => panic!("expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn full_i64_range_is_rejected_without_overflow() {
        assert!(matches!(
            render("", i64::MIN, i64::MAX, " "),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn reversed_range_never_hits_the_limit() {
        let renderer = SequenceRenderer::with_max_len(1);
        assert_eq!(renderer.render("p", i64::MAX, i64::MIN, " ").unwrap(), "p");
    }
}
