use crate::cursor::Cursor;

/// # `Opt` struct
/// Low-level representation of a CoAP Option.
///
/// Options are the CoAP equivalent of HTTP headers: a number identifying
/// what the option means (e.g. Uri-Path is 11) and an opaque value, which
/// here is a view into the parsed buffer.
///
/// On the wire the number is delta-encoded against the previous option's
/// number, which is why options must stay sorted ascending by number.
/// Parsing resolves the deltas, so `number` is always absolute.
///
/// See [RFC7252 §3.1](https://datatracker.ietf.org/doc/html/rfc7252#section-3.1)
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Opt<'a> {
  /// See [`OptNumber`]
  pub number: OptNumber,
  /// See [`OptValue`]
  pub value: OptValue<'a>,
}

/// The number identifying which option an [`Opt`] is
/// (e.g. Content-Format has a Number of 12).
///
/// Stored as `u32` because a single extended delta can reach
/// 65535 + 269, past what 16 bits hold.
///
/// See [RFC7252 §5.4.6](https://datatracker.ietf.org/doc/html/rfc7252#section-5.4.6)
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct OptNumber(pub u32);

/// An option's value; an opaque view into the parsed buffer.
///
/// See [RFC7252 §3.2](https://datatracker.ietf.org/doc/html/rfc7252#section-3.2)
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct OptValue<'a>(pub &'a [u8]);

/// Errors encounterable while parsing an option from bytes
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum OptParseError {
  /// An extended delta/length byte would read past the end of the packet
  OptionTooShortForHeader,

  /// Option delta nibble was 15, which is reserved
  OptionDeltaInvalid,

  /// Option length nibble was 15, which is reserved
  OptionLengthInvalid,

  /// The declared value length extends past the end of the packet
  OptionValueOverrunsPacket,
}

/// Decode a 4-bit delta or length nibble, consuming extension bytes
/// when the nibble says so.
///
/// | nibble | meaning                                   |
/// |--------|-------------------------------------------|
/// | 0-12   | the literal value                         |
/// | 13     | value is the next byte + 13               |
/// | 14     | value is the next 2 bytes (BE) + 269      |
/// | 15     | reserved                                  |
pub(crate) fn parse_opt_len_or_delta(nibble: u8,
                                     bytes: &mut Cursor<'_>,
                                     reserved_err: OptParseError)
                                     -> Result<u32, OptParseError> {
  match nibble {
    | 13 => match bytes.next() {
      | Some(n) => Ok(n as u32 + 13),
      | None => Err(OptParseError::OptionTooShortForHeader),
    },
    | 14 => match bytes.take_exact(2) {
      | Some(&[a, b]) => Ok(u16::from_be_bytes([a, b]) as u32 + 269),
      | _ => Err(OptParseError::OptionTooShortForHeader),
    },
    | 15 => Err(reserved_err),
    | _ => Ok(nibble as u32),
  }
}

impl<'a> Opt<'a> {
  /// Parse one option, resolving its delta against `number`, the running
  /// number accumulator, and advancing the accumulator past it.
  pub(crate) fn parse(bytes: &mut Cursor<'a>,
                      number: &mut OptNumber)
                      -> Result<Opt<'a>, OptParseError> {
    let head = match bytes.next() {
      | Some(b) => b,
      | None => return Err(OptParseError::OptionTooShortForHeader),
    };

    // NOTE: the delta nibble's extension bytes come first on the wire,
    // so it MUST be decoded before the length nibble.
    let delta = parse_opt_len_or_delta(head >> 4, bytes, OptParseError::OptionDeltaInvalid)?;
    let len =
      parse_opt_len_or_delta(head & 0b1111, bytes, OptParseError::OptionLengthInvalid)? as usize;

    let value = bytes.take_exact(len)
                     .ok_or(OptParseError::OptionValueOverrunsPacket)?;

    number.0 += delta;

    Ok(Opt { number: *number,
             value: OptValue(value) })
  }
}

/// The option numbers defined by RFC7252 §12.2.
pub mod known {
  use super::OptNumber;

  macro_rules! opt {
    (#[doc = $doc:expr] $name:ident = $n:literal) => {
      #[doc = $doc]
      pub const $name: OptNumber = OptNumber($n);
    };
  }

  opt!(#[doc = "If-Match"]
       IF_MATCH = 1);
  opt!(#[doc = "Uri-Host"]
       URI_HOST = 3);
  opt!(#[doc = "ETag"]
       ETAG = 4);
  opt!(#[doc = "If-None-Match"]
       IF_NONE_MATCH = 5);
  opt!(#[doc = "Observe"]
       OBSERVE = 6);
  opt!(#[doc = "Uri-Port"]
       URI_PORT = 7);
  opt!(#[doc = "Location-Path"]
       LOCATION_PATH = 8);
  opt!(#[doc = "Uri-Path; one option per path segment"]
       URI_PATH = 11);
  opt!(#[doc = "Content-Format"]
       CONTENT_FORMAT = 12);
  opt!(#[doc = "Max-Age"]
       MAX_AGE = 14);
  opt!(#[doc = "Uri-Query"]
       URI_QUERY = 15);
  opt!(#[doc = "Accept"]
       ACCEPT = 17);
  opt!(#[doc = "Location-Query"]
       LOCATION_QUERY = 20);
  opt!(#[doc = "Proxy-Uri"]
       PROXY_URI = 35);
  opt!(#[doc = "Proxy-Scheme"]
       PROXY_SCHEME = 39);
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse_one(bytes: &[u8]) -> Result<(Opt<'_>, OptNumber), OptParseError> {
    let mut cur = Cursor::new(bytes);
    let mut number = OptNumber(0);
    Opt::parse(&mut cur, &mut number).map(|o| (o, number))
  }

  #[test]
  fn parse_opt_literal_nibbles() {
    let (opt, _) = parse_one(&[0b0001_0001, 0x01]).unwrap();
    assert_eq!(opt,
               Opt { number: OptNumber(1),
                     value: OptValue(&[1]) });
  }

  #[test]
  fn parse_opt_extended_delta() {
    // delta nibble 13, extension byte 1 => 14
    let (opt, _) = parse_one(&[0b1101_0001, 0x01, 0xAA]).unwrap();
    assert_eq!(opt.number, OptNumber(14));

    // delta nibble 14, extension bytes 0x00 0x01 => 270
    let (opt, _) = parse_one(&[0b1110_0001, 0x00, 0x01, 0xAA]).unwrap();
    assert_eq!(opt.number, OptNumber(270));
  }

  #[test]
  fn parse_opt_extended_length_boundaries() {
    // length nibble 13 with extension byte 0 decodes to exactly 13
    let mut buf = [0u8; 15];
    buf[0] = 0b0001_1101;
    buf[1] = 0x00;
    let (opt, _) = parse_one(&buf).unwrap();
    assert_eq!(opt.value.0.len(), 13);

    // length nibble 14 with extension bytes 0x00 0x00 decodes to exactly 269
    let mut buf = [0u8; 4 + 269];
    buf[0] = 0b0001_1110;
    let (opt, _) = parse_one(&buf[..3 + 269]).unwrap();
    assert_eq!(opt.value.0.len(), 269);
  }

  #[test]
  fn parse_opt_reserved_nibbles() {
    assert_eq!(parse_one(&[0b1111_0001, 0x01]),
               Err(OptParseError::OptionDeltaInvalid));
    assert_eq!(parse_one(&[0b0001_1111, 0x01]),
               Err(OptParseError::OptionLengthInvalid));
  }

  #[test]
  fn parse_opt_overruns() {
    // extension byte missing
    assert_eq!(parse_one(&[0b1101_0000]),
               Err(OptParseError::OptionTooShortForHeader));

    // value longer than the rest of the packet
    assert_eq!(parse_one(&[0b0001_0101, 1, 2, 3]),
               Err(OptParseError::OptionValueOverrunsPacket));
  }

  #[test]
  fn running_number_accumulates() {
    let bytes = [0b1011_0001, 0xAA, 0b0001_0001, 0xBB];
    let mut cur = Cursor::new(&bytes);
    let mut number = OptNumber(0);

    let a = Opt::parse(&mut cur, &mut number).unwrap();
    let b = Opt::parse(&mut cur, &mut number).unwrap();

    assert_eq!(a.number, OptNumber(11));
    assert_eq!(b.number, OptNumber(12));
  }
}
