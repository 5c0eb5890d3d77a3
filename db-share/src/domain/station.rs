//! Station code types.

use std::fmt;

/// A station identifier as embedded in a refresh token.
///
/// DB station codes are usually numeric EVA numbers (`8000105` is
/// Frankfurt Hbf), but the token format allows any run of characters that
/// does not contain `@`. The code is carried through to the share payload
/// verbatim, so no further validation happens here.
///
/// # Examples
///
/// ```
/// use db_share::domain::StationCode;
///
/// let ffm = StationCode::parse("8000105").unwrap();
/// assert_eq!(ffm.as_str(), "8000105");
///
/// // The token delimiter can never be part of a code
/// assert!(StationCode::parse("8000@105").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationCode(String);

impl StationCode {
    /// Wrap a code, rejecting anything containing the `@` delimiter.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains('@') {
            return None;
        }
        Some(Self(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StationCode> for String {
    fn from(code: StationCode) -> Self {
        code.0
    }
}
