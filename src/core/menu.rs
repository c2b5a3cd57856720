/// Numbered theme menu and theme-number validation.

use crate::core::selection::SelectionError;
use crate::core::style::Palette;
use crate::schema::catalog::Catalog;

/// Theme names in catalog order, addressed by 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMenu<'a> {
    names: Vec<&'a str>,
}

impl<'a> ThemeMenu<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            names: catalog.theme_names(),
        }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The heading plus one `N. name` line per theme.
    pub fn render(&self, palette: Palette) -> String {
        let mut out = palette.heading("Available Themes:").to_string();
        for (i, name) in self.names.iter().enumerate() {
            out.push('\n');
            out.push_str(&palette.number(&format!("{}. ", i + 1)).to_string());
            out.push_str(&palette.heading(name).to_string());
        }
        out
    }

    /// Map a typed theme number to its 0-based position in the catalog.
    pub fn select(&self, input: &str) -> Result<usize, SelectionError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectionError::Blank);
        }

        let choice: i64 = trimmed
            .parse()
            .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

        let max = self.names.len();
        if choice < 1 || choice as u64 > max as u64 {
            return Err(SelectionError::OutOfRange { choice, max });
        }

        Ok((choice - 1) as usize)
    }
}

/// Ordered theme names of `catalog` with their numbered display.
pub fn list_themes(catalog: &Catalog) -> ThemeMenu<'_> {
    ThemeMenu::new(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::catalog::Theme;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::from_themes(
            names
                .iter()
                .map(|n| Theme {
                    name: n.to_string(),
                    stories: Vec::new(),
                })
                .collect(),
        )
    }

    #[test]
    fn names_keep_catalog_order() {
        let c = catalog(&["Zebra", "Apple", "Mango"]);
        let menu = list_themes(&c);
        assert_eq!(menu.names(), &["Zebra", "Apple", "Mango"]);
        assert_eq!(menu.len(), 3);
    }

    #[test]
    fn render_numbers_from_one() {
        let c = catalog(&["Animals", "Space"]);
        let text = list_themes(&c).render(Palette::Plain);
        assert_eq!(text, "Available Themes:\n1. Animals\n2. Space");
    }

    #[test]
    fn select_valid_numbers() {
        let c = catalog(&["Animals", "Space", "Food"]);
        let menu = list_themes(&c);
        assert_eq!(menu.select("1"), Ok(0));
        assert_eq!(menu.select(" 3 \n"), Ok(2));
    }

    #[test]
    fn selected_index_addresses_catalog_theme() {
        let c = catalog(&["Zebra", "Apple", "Mango"]);
        let menu = list_themes(&c);
        for (number, name) in [("1", "Zebra"), ("2", "Apple"), ("3", "Mango")] {
            let index = menu.select(number).unwrap();
            assert_eq!(c.themes()[index].name, name);
            assert_eq!(menu.names()[index], name);
        }
    }

    #[test]
    fn select_blank() {
        let c = catalog(&["Animals"]);
        assert_eq!(list_themes(&c).select("   "), Err(SelectionError::Blank));
    }

    #[test]
    fn select_not_a_number() {
        let c = catalog(&["Animals"]);
        assert_eq!(
            list_themes(&c).select("two"),
            Err(SelectionError::NotANumber("two".to_string()))
        );
        assert!(matches!(
            list_themes(&c).select("1.5"),
            Err(SelectionError::NotANumber(_))
        ));
    }

    #[test]
    fn select_out_of_range() {
        let c = catalog(&["Animals", "Space"]);
        let menu = list_themes(&c);
        assert_eq!(
            menu.select("0"),
            Err(SelectionError::OutOfRange { choice: 0, max: 2 })
        );
        assert_eq!(
            menu.select("3"),
            Err(SelectionError::OutOfRange { choice: 3, max: 2 })
        );
        assert_eq!(
            menu.select("-1"),
            Err(SelectionError::OutOfRange { choice: -1, max: 2 })
        );
        assert!(menu.select("3").unwrap_err().is_recoverable());
    }
}
