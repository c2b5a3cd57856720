//! Game configuration.
//!
//! Gathered from the command line by the `madlibs` binary and handed to
//! [`crate::core::session::Game::builder`].

use std::path::PathBuf;
use thiserror::Error;

use crate::core::style::DEFAULT_TITLE_WIDTH;
use crate::core::wrap::DEFAULT_WIDTH;

/// Narrowest accepted wrap width.
pub const MIN_WRAP_WIDTH: usize = 10;
/// Narrowest banner that still fits both borders and one column of text.
pub const MIN_TITLE_WIDTH: usize = 3;

pub const DEFAULT_STORIES_PATH: &str = "assets/stories.json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("wrap width must be at least {min}, got {0}", min = MIN_WRAP_WIDTH)]
    WrapWidth(usize),
    #[error("title width must be at least {min}, got {0}", min = MIN_TITLE_WIDTH)]
    TitleWidth(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Story catalog file (`.json` or `.ron`).
    pub stories_path: PathBuf,
    /// Column width the finished story is wrapped to.
    pub wrap_width: usize,
    /// Width of title banners, borders included.
    pub title_width: usize,
    /// Emit ANSI colors.
    pub color: bool,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stories_path: PathBuf::from(DEFAULT_STORIES_PATH),
            wrap_width: DEFAULT_WIDTH,
            title_width: DEFAULT_TITLE_WIDTH,
            color: true,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wrap_width < MIN_WRAP_WIDTH {
            return Err(ConfigError::WrapWidth(self.wrap_width));
        }
        if self.title_width < MIN_TITLE_WIDTH {
            return Err(ConfigError::TitleWidth(self.title_width));
        }
        Ok(())
    }
}
