use thiserror::Error;
use tinct_theme::ThemeError;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("theme context is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Theme(#[from] ThemeError),
}
