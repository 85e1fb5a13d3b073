pub mod css;
pub mod error;
pub mod pipeline;
pub mod theme;
pub mod tokens;

pub use error::{PipelineError, ThemeError};
pub use theme::{Theme, ThemePatch, create_subtheme, get_theme};
