use tinyvec::ArrayVec;

use crate::cursor::Cursor;
use crate::msg::*;

impl<'a, const OPT_CAP: usize> Message<'a, OPT_CAP> {
  /// Parse a message from the raw binary format.
  ///
  /// The returned message is a view: its token, option values and payload
  /// all borrow `bytes`.
  ///
  /// Options are read until the payload marker (`0xFF`), the end of the
  /// buffer, or a full option table — whichever comes first. A full table
  /// silently stops option parsing; it does not fail the message.
  ///
  /// ```
  /// use natter_msg::{Code, Message, Type};
  ///
  /// // NON POST, mid 0x0102, token "AB", payload "hi"
  /// let wire = [0x52, 0x02, 0x01, 0x02, b'A', b'B', 0xFF, b'h', b'i'];
  ///
  /// let msg: Message = Message::parse(&wire).unwrap();
  /// assert_eq!(msg.ty, Type::Non);
  /// assert_eq!(msg.code, Code::new(0, 2));
  /// assert_eq!(msg.token.0, b"AB");
  /// assert_eq!(msg.payload.0, b"hi");
  /// ```
  pub fn parse(bytes: &'a [u8]) -> Result<Self, MessageParseError> {
    if bytes.len() < 4 {
      return Err(MessageParseError::HeaderTooShort);
    }

    let mut bytes = Cursor::new(bytes);

    let Byte1 { ver, ty, tkl } = bytes.next()
                                      .ok_or(MessageParseError::HeaderTooShort)?
                                      .try_into()?;

    if ver != Version(1) {
      return Err(MessageParseError::VersionNotSupported(ver.0));
    }

    // 9-15 fit the 4-bit field but the protocol reserves them
    if tkl > 8 {
      return Err(MessageParseError::InvalidTokenLength(tkl));
    }

    let code: Code = bytes.next().ok_or(MessageParseError::HeaderTooShort)?.into();

    let id = match bytes.take_exact(2) {
      | Some(&[a, b]) => Id::from_be_bytes([a, b]),
      | _ => return Err(MessageParseError::HeaderTooShort),
    };

    let token = bytes.take_exact(tkl as usize)
                     .map(Token)
                     .ok_or(MessageParseError::TokenTooShort)?;

    let mut opts = ArrayVec::<[Opt<'a>; OPT_CAP]>::default();
    let mut number = OptNumber(0);

    while opts.len() < OPT_CAP {
      match bytes.peek() {
        | None | Some(0xFF) => break,
        | Some(_) => opts.push(Opt::parse(&mut bytes, &mut number)?),
      }
    }

    // A marker with nothing after it is a zero-length payload, not an error
    let payload = match bytes.next() {
      | Some(0xFF) => Payload(bytes.take_until_end()),
      | _ => Payload(&[]),
    };

    Ok(Message { id,
                 ty,
                 ver,
                 token,
                 code,
                 opts,
                 payload })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_bare_get() {
    let msg = Message::<8>::parse(&[0x40, 0x01, 0x00, 0x01]).unwrap();

    assert_eq!(msg.ver, Version(1));
    assert_eq!(msg.ty, Type::Con);
    assert_eq!(msg.code, Code::new(0, 1));
    assert_eq!(msg.id, Id(1));
    assert_eq!(msg.token.0.len(), 0);
    assert_eq!(msg.opts.len(), 0);
    assert_eq!(msg.payload.0.len(), 0);
  }

  #[test]
  fn parse_rejects_short_header() {
    assert_eq!(Message::<8>::parse(&[0x40, 0x01, 0x00]),
               Err(MessageParseError::HeaderTooShort));
  }

  #[test]
  fn parse_gates_on_version() {
    // version bits 10 instead of 01; everything else well-formed
    assert_eq!(Message::<8>::parse(&[0x80, 0x01, 0x00, 0x01]),
               Err(MessageParseError::VersionNotSupported(2)));
    assert_eq!(Message::<8>::parse(&[0x00, 0x01, 0x00, 0x01]),
               Err(MessageParseError::VersionNotSupported(0)));
  }

  #[test]
  fn parse_rejects_reserved_token_lengths() {
    assert_eq!(Message::<8>::parse(&[0x49, 0x01, 0x00, 0x01, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
               Err(MessageParseError::InvalidTokenLength(9)));
    assert_eq!(Message::<8>::parse(&[0x4F, 0x01, 0x00, 0x01]),
               Err(MessageParseError::InvalidTokenLength(15)));
  }

  #[test]
  fn parse_rejects_truncated_token() {
    // tkl 5 but only 2 token bytes on the wire
    assert_eq!(Message::<8>::parse(&[0x45, 0x01, 0x00, 0x01, 0xAA, 0xBB]),
               Err(MessageParseError::TokenTooShort));
  }

  #[test]
  fn parse_uri_path_options() {
    let wire = [0x40, 0x01, 0x30, 0x39, //
                0xB7, b's', b'e', b'n', b's', b'o', b'r', b's', //
                0x04, b't', b'e', b'm', b'p'];
    let msg = Message::<8>::parse(&wire).unwrap();

    assert_eq!(msg.id, Id(12345));
    assert_eq!(msg.opts.len(), 2);
    assert_eq!(msg.opts[0].number, known::URI_PATH);
    assert_eq!(msg.opts[0].value.0, b"sensors");
    assert_eq!(msg.opts[1].number, known::URI_PATH);
    assert_eq!(msg.opts[1].value.0, b"temp");
  }

  #[test]
  fn parse_trailing_marker_is_empty_payload() {
    let msg = Message::<8>::parse(&[0x40, 0x01, 0x00, 0x01, 0xFF]).unwrap();
    assert_eq!(msg.payload.0.len(), 0);
  }

  #[test]
  fn parse_bad_option_is_fatal() {
    assert_eq!(Message::<8>::parse(&[0x40, 0x01, 0x00, 0x01, 0xF1, 0x00]),
               Err(MessageParseError::OptParseError(OptParseError::OptionDeltaInvalid)));
  }

  #[test]
  fn parse_truncates_at_option_capacity() {
    // four 1-byte options but a table that only holds two
    let wire = [0x40, 0x01, 0x00, 0x01, //
                0x11, 0xAA, 0x11, 0xBB, 0x11, 0xCC, 0x11, 0xDD];
    let msg = Message::<2>::parse(&wire).unwrap();

    assert_eq!(msg.opts.len(), 2);
    assert_eq!(msg.opts[0].number, OptNumber(1));
    assert_eq!(msg.opts[1].number, OptNumber(2));
    // the unread options are not mistaken for a payload
    assert_eq!(msg.payload.0.len(), 0);
  }
}
