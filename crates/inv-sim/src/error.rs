use inv_core::CityId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("cannot place {aliens} aliens on a map with no cities")]
    NoCities { aliens: usize },

    #[error("{what} length {got} does not match alien count {expected}")]
    AlienCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("initial position {0} is not a city on the map")]
    UnknownCity(CityId),
}

pub type SimResult<T> = Result<T, SimError>;
