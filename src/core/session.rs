/// The game session: catalog → theme menu → random story → prompts → story.
///
/// Wires together the menu, random selection, input collection, blank
/// substitution, and wrapping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, GameConfig};
use crate::core::menu::ThemeMenu;
use crate::core::prompt::{PromptError, Prompter};
use crate::core::selection::{pick_random_story, SelectionError};
use crate::core::style::{Palette, DEFAULT_TITLE_WIDTH};
use crate::core::template::{fill_blanks, FilledText};
use crate::core::wrap::{wrap, DEFAULT_WIDTH};
use crate::schema::catalog::{Catalog, CatalogError, Story};

pub const GAME_TITLE: &str = "Mad Libs Game";
pub const THEME_PROMPT: &str = "Select a theme (enter the number): ";
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid selection. Please select a valid theme number.";
pub const FAREWELL_MESSAGE: &str = "Hope you had a laugh and enjoyed the mad libs!";
pub const INTERRUPT_MESSAGE: &str = "Game interrupted. Exiting gracefully...";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Selection(#[from] SelectionError),
    #[error("input closed before the story was finished")]
    InputClosed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no story catalog configured")]
    MissingCatalog,
}

impl From<PromptError> for SessionError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::InputClosed => SessionError::InputClosed,
            PromptError::Io(e) => SessionError::Io(e),
        }
    }
}

/// A story with the player's words filled in and wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedStory {
    pub title: String,
    pub filled: FilledText,
    pub lines: Vec<String>,
}

impl RenderedStory {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Substitutes player words into a story and wraps the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryRenderer {
    pub palette: Palette,
    pub width: usize,
}

impl Default for StoryRenderer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl StoryRenderer {
    pub fn new(palette: Palette, width: usize) -> Self {
        Self { palette, width }
    }

    pub fn render(&self, story: &Story, inputs: &[String]) -> RenderedStory {
        let filled = fill_blanks(&story.template(), inputs, |word| {
            self.palette.emphasis(word).to_string()
        });

        if !filled.is_exact() {
            tracing::warn!(
                title = %story.title,
                unfilled_blanks = filled.unfilled_blanks,
                unused_inputs = filled.unused_inputs,
                "placeholder count does not match blank count"
            );
        }

        let lines = wrap(&filled.text, self.width);
        RenderedStory {
            title: story.title.clone(),
            filled,
            lines,
        }
    }
}

/// What one completed round produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub theme: String,
    pub inputs: Vec<String>,
    pub story: RenderedStory,
}

/// One game over a loaded catalog. Built via `Game::builder()`.
pub struct Game {
    catalog: Catalog,
    renderer: StoryRenderer,
    title_width: usize,
    rng: StdRng,
}

/// Builder for constructing a `Game`.
pub struct GameBuilder {
    catalog_path: Option<PathBuf>,
    /// Directly provided catalog (for testing without files).
    catalog: Option<Catalog>,
    palette: Palette,
    wrap_width: usize,
    title_width: usize,
    seed: Option<u64>,
}

impl Game {
    pub fn builder() -> GameBuilder {
        GameBuilder {
            catalog_path: None,
            catalog: None,
            palette: Palette::default(),
            wrap_width: DEFAULT_WIDTH,
            title_width: DEFAULT_TITLE_WIDTH,
            seed: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Play one round, reading answers from `input` and writing to `output`.
    ///
    /// Invalid theme numbers are re-prompted. Fails when the chosen theme
    /// has no stories or when `input` ends early.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: W,
    ) -> Result<Outcome, SessionError> {
        let palette = self.renderer.palette;
        let mut prompter = Prompter::new(input, output);

        prompter.say(palette.title(GAME_TITLE, self.title_width))?;

        let menu = ThemeMenu::new(&self.catalog);
        prompter.say(menu.render(palette))?;

        let index = loop {
            let answer = prompter.ask(THEME_PROMPT)?;
            match menu.select(&answer) {
                Ok(index) => break index,
                Err(e) => {
                    tracing::debug!(error = %e, "invalid theme selection");
                    prompter.say(INVALID_SELECTION_MESSAGE)?;
                }
            }
        };
        let theme = &self.catalog.themes()[index];
        tracing::info!(theme = %theme.name, "theme selected");
        prompter.blank_line()?;

        let story = pick_random_story(theme, &mut self.rng)?;
        tracing::info!(title = %story.title, blanks = story.blank_count(), "story picked");

        let inputs = prompter.collect_inputs(story)?;
        prompter.blank_line()?;

        let rendered = self.renderer.render(story, &inputs);

        prompter.say(palette.title(&rendered.title, self.title_width))?;
        prompter.blank_line()?;
        for line in &rendered.lines {
            prompter.say(line)?;
        }
        prompter.blank_line()?;
        prompter.say(palette.farewell(FAREWELL_MESSAGE))?;

        Ok(Outcome {
            theme: theme.name.clone(),
            inputs,
            story: rendered,
        })
    }
}

impl GameBuilder {
    /// Apply every setting from a validated `GameConfig`.
    pub fn config(self, config: &GameConfig) -> Self {
        let builder = self
            .catalog_path(config.stories_path.clone())
            .palette(Palette::from_color_flag(config.color))
            .wrap_width(config.wrap_width)
            .title_width(config.title_width);
        match config.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }

    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Provide a catalog directly (for testing without files).
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn title_width(mut self, width: usize) -> Self {
        self.title_width = width;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Game, SessionError> {
        GameConfig {
            wrap_width: self.wrap_width,
            title_width: self.title_width,
            ..GameConfig::default()
        }
        .validate()?;

        // A directly provided catalog wins over a path.
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => Catalog::load(&path)?,
            (None, None) => return Err(SessionError::MissingCatalog),
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Game {
            catalog,
            renderer: StoryRenderer::new(self.palette, self.wrap_width),
            title_width: self.title_width,
            rng,
        })
    }
}
