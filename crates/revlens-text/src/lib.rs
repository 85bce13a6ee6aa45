//! Row-wise keyword scanning over free-text comment fields.
//!
//! Edit summaries describe what each revision was for, so presence and
//! frequency of keywords ("vandalism", a fan nickname, an article link)
//! are useful row-level features. Both scanners return a new column-shaped
//! vector aligned with the input; nothing is mutated in place.

pub mod patterns;

pub use patterns::{contains_wiki_link, count_word};
