use natter_msg::{known, Code, Message, Opt, OptValue, Payload, Type};
use tinyvec::ArrayVec;

use crate::content_format::ContentFormat;

/// How a response should be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyKind {
  /// Piggy-backed on the acknowledgement of a confirmable request
  /// (message type ACK).
  Piggyback,
  /// A separate confirmable response.
  Con,
  /// A separate non-confirmable response.
  Non,
}

impl ReplyKind {
  fn ty(&self) -> Type {
    match self {
      | ReplyKind::Piggyback => Type::Ack,
      | ReplyKind::Con => Type::Con,
      | ReplyKind::Non => Type::Non,
    }
  }
}

/// Errors encounterable building a reply
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum ReplyError {
  /// The scratch buffer cannot hold the 2-byte content-format value
  /// (plus the payload, for
  /// [`reply_from_scratch`])
  ScratchTooSmall,

  /// The message's option table cannot hold the content-format option
  TooManyOptions,
}

/// Build a reply to `req`: the given code and payload, the request's
/// message ID and token echoed back, and exactly one option —
/// Content-Format — whose 2-byte value is stored in the front of
/// `scratch`.
///
/// The Content-Format option is always emitted, **even for error codes**
/// (where `format` is typically [`ContentFormat::None`], wire value
/// `0xFFFF`). Peers tolerate this; strip the option yourself if yours
/// does not.
///
/// `payload` must outlive the scratch buffer's borrow; in practice that
/// means a `static`, the request buffer, or a region of `scratch` itself —
/// for the latter use [`reply_from_scratch`], which does the carving
/// safely.
///
/// ```
/// use natter::msg::{known, Message};
/// use natter::{code, resp, ContentFormat, ReplyKind};
///
/// let req: Message = Message::parse(&[0x45, 0x01, 0x00, 0x07, 1, 2, 3, 4, 5]).unwrap();
///
/// let mut scratch = [0u8; 8];
/// let rsp = resp::reply(&mut scratch,
///                       &req,
///                       ReplyKind::Piggyback,
///                       code::CONTENT,
///                       ContentFormat::Text,
///                       b"22.5").unwrap();
///
/// assert_eq!(rsp.id, req.id);
/// assert_eq!(rsp.token, req.token);
/// assert_eq!(rsp.find_options(known::CONTENT_FORMAT)[0].value.0, &[0, 0]);
/// assert_eq!(rsp.payload.0, b"22.5");
/// ```
pub fn reply<'s, const OPT_CAP: usize>(scratch: &'s mut [u8],
                                       req: &Message<'s, OPT_CAP>,
                                       kind: ReplyKind,
                                       code: Code,
                                       format: ContentFormat,
                                       payload: &'s [u8])
                                       -> Result<Message<'s, OPT_CAP>, ReplyError> {
  if scratch.len() < 2 {
    return Err(ReplyError::ScratchTooSmall);
  }

  if OPT_CAP == 0 {
    return Err(ReplyError::TooManyOptions);
  }

  let (format_bytes, _) = scratch.split_at_mut(2);
  format_bytes.copy_from_slice(&format.bytes());

  let mut opts = ArrayVec::default();
  opts.push(Opt { number: known::CONTENT_FORMAT,
                  value: OptValue(format_bytes) });

  Ok(Message { id: req.id,
               ty: kind.ty(),
               ver: Default::default(),
               token: req.token,
               code,
               opts,
               payload: Payload(payload) })
}

/// Like [`reply`], for payloads the handler has already rendered into the
/// scratch buffer.
///
/// The convention: `scratch[..2]` is reserved for the content-format
/// value, and the payload is the `payload_len` bytes starting at
/// `scratch[2]`. Handlers write their payload there, then hand the whole
/// buffer over:
///
/// ```
/// use natter::msg::Message;
/// use natter::{code, resp, ContentFormat, ReplyKind};
///
/// let req: Message = Message::parse(&[0x40, 0x01, 0x00, 0x07]).unwrap();
///
/// let mut scratch = [0u8; 16];
/// scratch[2..6].copy_from_slice(b"13.1");
///
/// let rsp = resp::reply_from_scratch(&mut scratch,
///                                    4,
///                                    &req,
///                                    ReplyKind::Piggyback,
///                                    code::CONTENT,
///                                    ContentFormat::Text).unwrap();
///
/// assert_eq!(rsp.payload.0, b"13.1");
/// ```
pub fn reply_from_scratch<'s, const OPT_CAP: usize>(scratch: &'s mut [u8],
                                                    payload_len: usize,
                                                    req: &Message<'s, OPT_CAP>,
                                                    kind: ReplyKind,
                                                    code: Code,
                                                    format: ContentFormat)
                                                    -> Result<Message<'s, OPT_CAP>, ReplyError> {
  if scratch.len() < 2 + payload_len {
    return Err(ReplyError::ScratchTooSmall);
  }

  if OPT_CAP == 0 {
    return Err(ReplyError::TooManyOptions);
  }

  let (format_bytes, rest) = scratch.split_at_mut(2);
  format_bytes.copy_from_slice(&format.bytes());

  let mut opts = ArrayVec::default();
  opts.push(Opt { number: known::CONTENT_FORMAT,
                  value: OptValue(format_bytes) });

  Ok(Message { id: req.id,
               ty: kind.ty(),
               ver: Default::default(),
               token: req.token,
               code,
               opts,
               payload: Payload(&rest[..payload_len]) })
}
