/// UI configuration options derived from config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Instant scrolling and no reveal fades.
    pub reduced_motion: bool,
}
