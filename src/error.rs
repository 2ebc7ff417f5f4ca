/// Failure conditions of the quiz core and its explanation requester.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or missing card data. Never replaced by a default hand.
    #[error("invalid hand: {0}")]
    InvalidHand(String),
    /// A required request field is absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// The answer text does not normalize to fold, call or raise.
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
    /// The coach errored, timed out, or produced nothing usable.
    #[error("explanation unavailable: {0}")]
    UpstreamExplanation(String),
    /// No usable credential for the completion service.
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),
}

impl Error {
    /// True for failures caused by the caller's input.
    pub fn is_client(&self) -> bool {
        matches!(
            self,
            Error::InvalidHand(_) | Error::MissingField(_) | Error::UnknownAction(_)
        )
    }
}
