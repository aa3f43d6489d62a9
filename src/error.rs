/// Invalid star configuration, detected before the first frame
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("layout has no spines")]
    NoSpines,

    #[error("spines have no LEDs")]
    EmptySpine,

    #[error("spine length {0} is odd, mirrored slots need an even length")]
    OddSpineLength(u8),

    #[error("layout describes {expected} LEDs but the frame holds {actual}")]
    LedCountMismatch { expected: usize, actual: usize },
}
