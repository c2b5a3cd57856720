/// Greedy word wrap measured in terminal columns.

use textwrap::core::display_width;
use textwrap::{Options, WordSplitter, WrapAlgorithm};

/// Default column width for wrapped story text.
pub const DEFAULT_WIDTH: usize = 60;

/// Break `text` into lines of at most `width` columns.
///
/// Words are whitespace-delimited and never split. A word joins the
/// current line while the line, counting one trailing separator per word,
/// stays within `width`. A word longer than `width` gets a line of its own.
/// Widths come from `display_width`, so ANSI styling takes no columns and
/// wide characters take two.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let words = text.split_whitespace().collect::<Vec<_>>().join(" ");

    // The trailing separator is not printed, so it comes off the width.
    let options = Options::new(width.saturating_sub(1).max(1))
        .break_words(false)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit);

    textwrap::wrap(&words, options)
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.into_owned())
        .collect()
}
