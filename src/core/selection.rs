/// Theme choice validation errors and random story selection.

use rand::Rng;
use thiserror::Error;

use crate::schema::catalog::{Story, Theme};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no selection entered")]
    Blank,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("{choice} is not between 1 and {max}")]
    OutOfRange { choice: i64, max: usize },
    #[error("no stories found for theme '{0}'")]
    EmptyTheme(String),
}

impl SelectionError {
    /// Whether the player can fix this by choosing again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::EmptyTheme(_))
    }
}

/// Uniform index in `0..count`, or `None` when `count` is zero.
pub fn pick_index<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Option<usize> {
    if count == 0 {
        None
    } else {
        Some(rng.gen_range(0..count))
    }
}

/// Choose one story from `theme` uniformly at random.
pub fn pick_random_story<'a, R: Rng + ?Sized>(
    theme: &'a Theme,
    rng: &mut R,
) -> Result<&'a Story, SelectionError> {
    let index = pick_index(theme.stories.len(), rng)
        .ok_or_else(|| SelectionError::EmptyTheme(theme.name.clone()))?;

    tracing::debug!(theme = %theme.name, index, of = theme.stories.len(), "story picked");
    Ok(&theme.stories[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::Placeholder;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn story(title: &str) -> Story {
        Story {
            title: title.to_string(),
            story: vec!["A".to_string(), "___".to_string()],
            placeholders: vec![Placeholder::new("a noun")],
        }
    }

    fn theme(titles: &[&str]) -> Theme {
        Theme {
            name: "Test".to_string(),
            stories: titles.iter().map(|t| story(t)).collect(),
        }
    }

    #[test]
    fn index_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..20 {
            for _ in 0..50 {
                let i = pick_index(count, &mut rng).unwrap();
                assert!(i < count);
            }
        }
    }

    #[test]
    fn zero_count_has_no_index() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_index(0, &mut rng), None);
    }

    #[test]
    fn empty_theme_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = theme(&[]);
        let err = pick_random_story(&t, &mut rng).unwrap_err();
        assert_eq!(err, SelectionError::EmptyTheme("Test".to_string()));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn single_story_always_picked() {
        let mut rng = StdRng::seed_from_u64(99);
        let t = theme(&["Only"]);
        for _ in 0..10 {
            assert_eq!(pick_random_story(&t, &mut rng).unwrap().title, "Only");
        }
    }

    #[test]
    fn every_story_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let t = theme(&["One", "Two", "Three"]);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick_random_story(&t, &mut rng).unwrap().title.clone());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn same_seed_same_story() {
        let t = theme(&["One", "Two", "Three", "Four"]);
        let a = pick_random_story(&t, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = pick_random_story(&t, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }
}
