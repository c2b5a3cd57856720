/// Blank-token substitution for story templates.

/// The literal marker for a fill-in point.
pub const BLANK_TOKEN: &str = "___";

/// Join narrative segments into a single template string.
pub fn join_segments(segments: &[String]) -> String {
    segments.join(" ")
}

/// Result of substituting player words into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledText {
    pub text: String,
    /// Number of blanks that received a word.
    pub filled: usize,
    /// Blanks left in place because the words ran out.
    pub unfilled_blanks: usize,
    /// Words never used because the blanks ran out.
    pub unused_inputs: usize,
}

impl FilledText {
    pub fn is_exact(&self) -> bool {
        self.unfilled_blanks == 0 && self.unused_inputs == 0
    }
}

/// Replace blanks left-to-right with `inputs`, one word per blank.
///
/// Each word passes through `decorate` before insertion. Only the
/// template is scanned for blanks, so a word that itself contains
/// `___` is never refilled.
pub fn fill_blanks<F>(template: &str, inputs: &[String], mut decorate: F) -> FilledText
where
    F: FnMut(&str) -> String,
{
    let mut text = String::with_capacity(template.len() + inputs.iter().map(String::len).sum::<usize>());
    let mut rest = template;
    let mut filled = 0;

    for word in inputs {
        let Some(pos) = rest.find(BLANK_TOKEN) else {
            break;
        };
        text.push_str(&rest[..pos]);
        text.push_str(&decorate(word));
        rest = &rest[pos + BLANK_TOKEN.len()..];
        filled += 1;
    }

    text.push_str(rest);

    FilledText {
        text,
        filled,
        unfilled_blanks: rest.matches(BLANK_TOKEN).count(),
        unused_inputs: inputs.len() - filled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    fn bracket(w: &str) -> String {
        format!("[{}]", w)
    }

    #[test]
    fn join_uses_single_spaces() {
        let segments = words(&["The", "___", "jumped", "over", "the", "___."]);
        assert_eq!(join_segments(&segments), "The ___ jumped over the ___.");
    }

    #[test]
    fn fills_in_order() {
        let filled = fill_blanks(
            "The ___ jumped over the ___.",
            &words(&["fox", "lazy"]),
            |w| w.to_string(),
        );
        assert_eq!(filled.text, "The fox jumped over the lazy.");
        assert_eq!(filled.filled, 2);
        assert!(filled.is_exact());
    }

    #[test]
    fn decorates_each_word() {
        let filled = fill_blanks("A ___ and a ___", &words(&["cat", "dog"]), bracket);
        assert_eq!(filled.text, "A [cat] and a [dog]");
    }

    #[test]
    fn leftover_blanks_stay() {
        let filled = fill_blanks("___ ___ ___", &words(&["one"]), bracket);
        assert_eq!(filled.text, "[one] ___ ___");
        assert_eq!(filled.unfilled_blanks, 2);
        assert_eq!(filled.unused_inputs, 0);
    }

    #[test]
    fn leftover_inputs_dropped() {
        let filled = fill_blanks("only ___ here", &words(&["one", "two", "three"]), bracket);
        assert_eq!(filled.text, "only [one] here");
        assert_eq!(filled.unfilled_blanks, 0);
        assert_eq!(filled.unused_inputs, 2);
    }

    #[test]
    fn word_containing_blank_is_not_refilled() {
        let filled = fill_blanks("___ then ___", &words(&["a___b", "c"]), |w| w.to_string());
        assert_eq!(filled.text, "a___b then c");
        assert!(filled.is_exact());
    }

    #[test]
    fn blank_attached_to_punctuation() {
        let filled = fill_blanks("Hello, ___!", &words(&["world"]), |w| w.to_string());
        assert_eq!(filled.text, "Hello, world!");
    }

    #[test]
    fn no_blanks_no_inputs() {
        let filled = fill_blanks("Plain text.", &[], bracket);
        assert_eq!(filled.text, "Plain text.");
        assert!(filled.is_exact());
    }

    #[test]
    fn k_blanks_k_inputs_leaves_nothing() {
        for k in 0..8 {
            let template = vec![BLANK_TOKEN; k].join(" x ");
            let inputs: Vec<String> = (0..k).map(|i| format!("w{}", i)).collect();
            let filled = fill_blanks(&template, &inputs, |w| w.to_string());
            assert!(!filled.text.contains(BLANK_TOKEN), "k={}", k);
            assert!(filled.is_exact());
            assert_eq!(filled.filled, k);
        }
    }
}
