/// Lifecycle of an observable section.
///
/// The only transition is `Pending -> Revealed`; a revealed section never
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

impl RevealPhase {
    #[must_use]
    pub const fn has_entered(self) -> bool {
        matches!(self, RevealPhase::Revealed)
    }
}
