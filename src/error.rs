use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Returned when strictly parsing a [`ServerVersion`](crate::ServerVersion) from a string that
/// does not name a known version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownVersionError {
    input: String,
}

impl UnknownVersionError {
    pub(crate) fn new(input: &str) -> Self {
        UnknownVersionError {
            input: input.to_owned(),
        }
    }

    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for UnknownVersionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown server version \"{}\"", self.input)
    }
}

impl Error for UnknownVersionError {}
