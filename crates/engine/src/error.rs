use thiserror::Error;

use crate::input::InputError;
use crate::term::DisplayError;

/// Anything that can end `Engine::run` early.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Display(#[from] DisplayError),
}
