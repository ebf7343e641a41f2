//! Pure DNA sequence transforms.
//!
//! - [`validate_strict`] / [`gc_percent`] — the unambiguous alphabet A/C/G/T
//!   plus the ambiguity placeholder N, case-insensitive
//! - [`reverse_complement`] — total over all strings; unrecognized characters
//!   pass through unchanged

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Sequence must contain only A/C/G/T/N and not be empty.")]
    InvalidSequence,
}

/// An uppercased sequence known to contain only A/C/G/T/N.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSequence(String);

impl ValidSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercase the input and check it against the strict alphabet.
/// Empty input is rejected.
pub fn validate_strict(seq: &str) -> Result<ValidSequence, SequenceError> {
    let upper = seq.to_ascii_uppercase();
    if upper.is_empty()
        || upper
            .bytes()
            .any(|b| !matches!(b, b'A' | b'C' | b'G' | b'T' | b'N'))
    {
        return Err(SequenceError::InvalidSequence);
    }
    Ok(ValidSequence(upper))
}

/// GC content as a percentage of the non-N bases, rounded to two decimals
/// (half away from zero). An all-N sequence yields 0.0.
pub fn gc_percent(seq: &str) -> Result<f64, SequenceError> {
    let valid = validate_strict(seq)?;
    let bases = valid.as_str().as_bytes();
    let gc = bases.iter().filter(|&&b| b == b'G' || b == b'C').count();
    let n = bases.iter().filter(|&&b| b == b'N').count();
    let denom = bases.len() - n;
    if denom == 0 {
        return Ok(0.0);
    }
    Ok((100.0 * gc as f64 / denom as f64 * 100.0).round() / 100.0)
}

// Complement table: case preserved, N maps to N, anything else to itself.
fn complement(c: char) -> char {
    match c {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        'a' => 't',
        't' => 'a',
        'c' => 'g',
        'g' => 'c',
        'N' => 'N',
        'n' => 'n',
        other => other,
    }
}

/// Return the reverse complement. Never fails: characters outside the
/// complement table are carried through unchanged at their reversed position.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}
