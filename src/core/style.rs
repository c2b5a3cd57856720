/// Terminal styling: palettes and the bordered title banner.
///
/// Every styled value is a `ColoredString`, which writes its own reset
/// sequence after the text, so no color ever carries past the value it
/// was applied to.

use colored::{ColoredString, Colorize};

/// Default width of the title banner, borders included.
pub const DEFAULT_TITLE_WIDTH: usize = 60;

/// Turn ANSI output on or off for the whole process and return the
/// matching palette.
///
/// `colored` otherwise consults `NO_COLOR`, `CLICOLOR` and
/// `CLICOLOR_FORCE` itself; this override makes the caller's choice final.
pub fn set_color_enabled(enabled: bool) -> Palette {
    colored::control::set_override(enabled);
    Palette::from_color_flag(enabled)
}

/// How game text is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// ANSI colors.
    #[default]
    Color,
    /// No escape sequences at all.
    Plain,
}

impl Palette {
    pub fn from_color_flag(color: bool) -> Self {
        if color {
            Self::Color
        } else {
            Self::Plain
        }
    }

    fn apply(&self, text: &str, paint: fn(&str) -> ColoredString) -> ColoredString {
        match self {
            Self::Color => paint(text),
            Self::Plain => text.normal(),
        }
    }

    /// A word the player supplied.
    pub fn emphasis(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.green())
    }

    pub fn banner(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.blue())
    }

    pub fn heading(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.green())
    }

    pub fn number(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.red())
    }

    pub fn error(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.red())
    }

    pub fn farewell(&self, text: &str) -> ColoredString {
        self.apply(text, |t| t.green())
    }

    /// The title banner with every line painted in the banner color.
    pub fn title(&self, text: &str, width: usize) -> String {
        render_title(text, width)
            .lines()
            .map(|line| self.banner(line).to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Draw a three-line box `width` columns wide with `text` centered inside.
///
/// Extra space goes to the right of the text. A title wider than the box
/// is kept whole and pushes the right border out.
pub fn render_title(text: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    let text_len = text.chars().count();
    let left = inner.saturating_sub(text_len) / 2;
    let right = inner.saturating_sub(text_len + left);
    let rule = "═".repeat(inner);

    format!(
        "╔{rule}╗\n║{}{text}{}║\n╚{rule}╝",
        " ".repeat(left),
        " ".repeat(right),
    )
}
