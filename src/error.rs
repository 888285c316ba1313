use crate::{scene::BodyId, Fp};

pub type Result<T> = std::result::Result<T, SimError>;

/// Ways the simulation core refuses its input.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum SimError {
    /// Mass must be finite and strictly positive.
    #[error("invalid mass {0}: must be finite and greater than zero")]
    InvalidMass(Fp),
    /// Size must be finite and non-negative.
    #[error("invalid size {width}x{height}: must be finite and non-negative")]
    InvalidSize { width: Fp, height: Fp },
    /// A NaN or infinite value reached a call boundary. Names the offending input.
    #[error("non-finite {0}")]
    NonFiniteInput(&'static str),
    #[error("negative time step {0}")]
    NegativeTimeStep(Fp),
    /// The handle was never issued by this scene, or its body has been removed.
    #[error("no body with id {0:?}")]
    UnknownBody(BodyId),
}
