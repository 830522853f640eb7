pub mod hint;

pub use hint::{annotate_model_hint, insert_model_hint};
