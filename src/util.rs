//! Small text helpers shared by the metrics and the command line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Length of the common prefix of `a` and `b`, capped at `limit`
pub(crate) fn common_prefix_len(a: &[char], b: &[char], limit: usize) -> usize {
    a.iter().zip(b).take(limit).take_while(|(x, y)| x == y).count()
}

/// Decompose `s` (NFD) and drop combining marks, so that `"café"` becomes
/// `"cafe"`.
///
/// ```
/// use simmetrics::util::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Crème Brûlée"), "Creme Brulee");
/// ```
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|&ch| !is_combining_mark(ch)).collect()
}

/// Read the lines of a file, dropping blank ones
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, std::io::Error> {
    let file = File::open(path)?;
    BufReader::new(file)
        .lines()
        .filter(|line| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .collect()
}
