/// Content-Format
///
/// The value of a Content-Format option, identifying the media type of a
/// payload.
///
/// See [RFC7252 §12.3](https://datatracker.ietf.org/doc/html/rfc7252#section-12.3)
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentFormat {
  /// No meaningful content format.
  ///
  /// Replies always carry a Content-Format option — errors included —
  /// and this is the value they carry when there is nothing sensible to
  /// say; it is written to the wire as `0xFFFF` (an unassigned value).
  None,
  /// `text/plain; charset=utf-8`
  Text,
  /// `application/link-format`
  LinkFormat,
  /// `application/xml`
  Xml,
  /// `application/octet-stream`
  OctetStream,
  /// `application/json`
  Json,
  /// Another content format
  Other(u16),
}

impl ContentFormat {
  /// Convert this content format to the CoAP byte value
  pub fn bytes(&self) -> [u8; 2] {
    u16::from(self).to_be_bytes()
  }
}

impl<'a> From<&'a ContentFormat> for u16 {
  fn from(f: &'a ContentFormat) -> Self {
    use ContentFormat::*;
    match *f {
      | None => 0xFFFF,
      | Text => 0,
      | LinkFormat => 40,
      | Xml => 41,
      | OctetStream => 42,
      | Json => 50,
      | Other(n) => n,
    }
  }
}

impl From<u16> for ContentFormat {
  fn from(n: u16) -> Self {
    use ContentFormat::*;
    match n {
      | 0xFFFF => None,
      | 0 => Text,
      | 40 => LinkFormat,
      | 41 => Xml,
      | 42 => OctetStream,
      | 50 => Json,
      | n => Other(n),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wire_values() {
    assert_eq!(ContentFormat::Text.bytes(), [0, 0]);
    assert_eq!(ContentFormat::LinkFormat.bytes(), [0, 40]);
    assert_eq!(ContentFormat::None.bytes(), [0xFF, 0xFF]);
    assert_eq!(ContentFormat::from(40u16), ContentFormat::LinkFormat);
  }
}
