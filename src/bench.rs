//! Shared fixtures for the Criterion benchmarks.

/// Builds a deterministic vocabulary of `size` distinct words.
///
/// Words are spelled from the index in base 26, so neighbouring indices
/// share long prefixes the way a real dictionary does.
pub fn synthetic_vocabulary(size: usize) -> Vec<String> {
    (0..size)
        .map(|mut index| {
            let mut word = String::new();
            loop {
                word.push((b'a' + (index % 26) as u8) as char);
                index /= 26;
                if index == 0 {
                    break;
                }
            }
            word.chars().rev().collect()
        })
        .collect()
}
