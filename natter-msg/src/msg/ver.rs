/// Version of the CoAP protocol that the message adheres to.
///
/// Right now, this will always be 1; a message declaring any other
/// version fails to parse with
/// [`MessageParseError::VersionNotSupported`](super::MessageParseError::VersionNotSupported).
#[derive(Copy, Clone, Hash, PartialEq, PartialOrd, Debug, Eq, Ord)]
pub struct Version(pub u8);

impl Default for Version {
  fn default() -> Self {
    Version(1)
  }
}
