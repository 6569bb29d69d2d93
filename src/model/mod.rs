//! Data model shared by the extraction pipeline.
//!
//! Every value here is built once per conversion and never mutated
//! afterwards: [`RawQuestion`] and [`AnswerKey`] come out of the extractors,
//! [`Flashcard`] out of the synthesizer, and [`ConversionResult`] is the
//! document handed to whoever registers the flashcard set.

mod flashcard;
mod question;
mod result;

pub use flashcard::Flashcard;
pub use question::{AnswerKey, OptionMap, RawQuestion};
pub use result::{ConversionMetadata, ConversionResult};
