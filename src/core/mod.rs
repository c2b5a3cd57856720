pub mod menu;
pub mod prompt;
pub mod selection;
pub mod session;
pub mod style;
pub mod template;
pub mod wrap;
