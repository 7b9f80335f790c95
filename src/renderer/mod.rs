//! Template rendering for the tour
//!
//! - `interface`: the `TemplateRenderer` trait
//! - `minijinja`: MiniJinja-backed implementation with the `seq` helper
//! - `sequence`: the inclusive integer sequence renderer

pub mod interface;
pub mod minijinja;
pub mod sequence;

pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;
pub use sequence::{render as render_sequence, SequenceRenderer};
