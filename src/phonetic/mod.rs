//! Phonetic and prefix-weighted metrics.

mod jaro;
mod soundex;

pub use jaro::{Jaro, JaroWinkler};
pub use soundex::{Soundex, soundex};
