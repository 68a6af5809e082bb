//! Order-preserving filtering of values by how often they occur.
//!
//! The central operation is [`filter_by_threshold`], which keeps each distinct value whose total
//! occurrence count is at most some threshold:
//!
//! ```rust
//! assert_eq!(freqcap::filter_by_threshold(&[1, 1, 2, 3], 1), vec![2, 3]);
//! assert_eq!(freqcap::filter_by_threshold(&[1, 1, 1], 3), vec![1]);
//! ```
//!
//! Kept values appear once each, in the order of their first occurrence. Thresholds are signed,
//! and a negative threshold keeps nothing.

pub mod counts;
pub mod filter;
pub mod input;

pub use counts::Frequencies;
pub use filter::{filter_by_threshold, retain_by_threshold};
pub use input::{read_lines, read_values};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    #[error("Invalid value on line {line}: {value:?}")]
    InvalidValue { line: usize, value: String },
}
