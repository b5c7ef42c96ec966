//! Input counters shown under the editor.

/// Share of the input word count a summary is expected to keep, in tenths.
const SUMMARY_RATIO_TENTHS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
    /// Rough summary length: 30% of the words, rounded up.
    pub estimated_summary_words: usize,
}

impl TextStats {
    pub fn from_input(input: &str) -> Self {
        let words = input.split_whitespace().count();
        Self {
            characters: input.chars().count(),
            words,
            estimated_summary_words: (words * SUMMARY_RATIO_TENTHS).div_ceil(10),
        }
    }
}
