// error.rs - Host-level errors

use life_engine::LifeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error(transparent)]
    Life(#[from] LifeError),

    #[error("window error: {0}")]
    Window(String),
}
