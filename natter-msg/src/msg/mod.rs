use tinyvec::ArrayVec;

/// Message Code
pub mod code;

/// Message parsing errors
pub mod parse_error;

/// Message ID
pub mod id;

/// Message Options
pub mod opt;

/// Message Type
pub mod ty;

/// Message Token
pub mod token;

/// Message Version
pub mod ver;

pub use code::*;
pub use id::*;
pub use opt::*;
pub use parse_error::*;
pub use token::*;
pub use ty::*;
pub use ver::*;

/// Message payload
///
/// A view into the bytes following the `0xFF` payload marker, or an empty
/// slice when the message carries none.
///
/// See [RFC7252 §5.5](https://datatracker.ietf.org/doc/html/rfc7252#section-5.5)
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Payload<'a>(pub &'a [u8]);

/// Struct representing the first byte of a message.
///
/// ```text
/// CoAP version
/// |
/// |  Message type (confirmable, ack, ..)
/// |  |
/// |  |  Length of token, in bytes. (4-bit integer)
/// |  |  |
/// vv vv vvvv
/// 01 00 0000
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct Byte1 {
  pub(crate) ver: Version,
  pub(crate) ty: Type,
  pub(crate) tkl: u8,
}

impl TryFrom<u8> for Byte1 {
  type Error = MessageParseError;

  fn try_from(b: u8) -> Result<Self, Self::Error> {
    let ver = b >> 6; // bits 0 & 1
    let ty = b >> 4 & 0b11; // bits 2 & 3
    let tkl = b & 0b1111u8; // last 4 bits

    Ok(Byte1 { ver: Version(ver),
               ty: Type::try_from(ty)?,
               tkl })
  }
}

/// # `Message` struct
/// Low-level representation of a message, either freshly parsed from the
/// raw binary format or about to be serialized into it.
///
/// `Message` is a *view*: the token, option values and payload all borrow
/// the buffer the message was parsed from (lifetime `'a`). A message you
/// construct yourself borrows whatever buffers you point it at.
///
/// The second parameter is the option-table capacity. 8 suits the small
/// request/response messages this crate is aimed at; raise it if you
/// expect chattier peers.
///
/// Options **must** be kept sorted ascending by [`OptNumber`]; the wire
/// format's delta encoding makes this an invariant, not a convention.
/// Parsing produces sorted options by construction, and [`Message::build`]
/// refuses unsorted ones.
///
/// See [RFC7252 §3](https://datatracker.ietf.org/doc/html/rfc7252#section-3)
/// for the binary format.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Message<'a, const OPT_CAP: usize = 8> {
  /// see [`Id`] for details
  pub id: Id,
  /// see [`Type`] for details
  pub ty: Type,
  /// see [`Version`] for details
  pub ver: Version,
  /// see [`Token`] for details
  pub token: Token<'a>,
  /// see [`Code`] for details
  pub code: Code,
  /// see [`opt::Opt`] for details
  pub opts: ArrayVec<[Opt<'a>; OPT_CAP]>,
  /// see [`Payload`]
  pub payload: Payload<'a>,
}

impl<'a, const OPT_CAP: usize> Message<'a, OPT_CAP> {
  /// Create a new message that ACKs this one.
  ///
  /// The acknowledgement echoes this message's [`Id`] and [`Token`] and is
  /// otherwise empty (code 0.00, no options, no payload).
  ///
  /// ```
  /// use natter_msg::{Message, Type};
  ///
  /// let req: Message = Message::parse(&[0x45, 0x01, 0x12, 0x34, 1, 2, 3, 4, 5]).unwrap();
  /// let ack = req.ack();
  ///
  /// assert_eq!(ack.ty, Type::Ack);
  /// assert_eq!(ack.id, req.id);
  /// assert_eq!(ack.token, req.token);
  /// assert_eq!(ack.payload.0.len(), 0);
  /// ```
  pub fn ack(&self) -> Message<'a, OPT_CAP> {
    Message { id: self.id,
              ty: Type::Ack,
              ver: Default::default(),
              token: self.token,
              code: Code::new(0, 0),
              opts: Default::default(),
              payload: Payload(&[]) }
  }

  /// Find the options with a given number.
  ///
  /// Because options are stored sorted ascending by number, all entries
  /// sharing a number form one contiguous run; the run is returned as a
  /// subslice (possibly empty). The scan stops as soon as the run ends.
  ///
  /// ```
  /// use natter_msg::{known, Message};
  ///
  /// // GET coap://../sensors/temp
  /// let wire = [0x40, 0x01, 0x00, 0x01, //
  ///             0xB7, b's', b'e', b'n', b's', b'o', b'r', b's', //
  ///             0x04, b't', b'e', b'm', b'p'];
  /// let msg: Message = Message::parse(&wire).unwrap();
  ///
  /// let path = msg.find_options(known::URI_PATH);
  /// assert_eq!(path.len(), 2);
  /// assert_eq!(path[0].value.0, b"sensors");
  /// assert_eq!(path[1].value.0, b"temp");
  /// ```
  pub fn find_options(&self, number: OptNumber) -> &[Opt<'a>] {
    let mut first = None;
    let mut count = 0;

    for (ix, opt) in self.opts.iter().enumerate() {
      if opt.number == number {
        if first.is_none() {
          first = Some(ix);
        }

        count += 1;
      } else if first.is_some() {
        break;
      }
    }

    match first {
      | Some(ix) => &self.opts[ix..ix + count],
      | None => &[],
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_byte1() {
    let byte = 0b_01_10_0011u8;
    let byte = Byte1::try_from(byte).unwrap();
    assert_eq!(byte,
               Byte1 { ver: Version(1),
                       ty: Type::Ack,
                       tkl: 3 })
  }

  #[test]
  fn find_options_returns_contiguous_run() {
    let mut opts = ArrayVec::<[Opt; 8]>::default();
    opts.push(Opt { number: OptNumber(3),
                    value: OptValue(b"host") });
    opts.push(Opt { number: OptNumber(11),
                    value: OptValue(b"a") });
    opts.push(Opt { number: OptNumber(11),
                    value: OptValue(b"b") });
    opts.push(Opt { number: OptNumber(12),
                    value: OptValue(&[0, 0]) });

    let msg = Message::<8> { id: Id(1),
                             ty: Type::Con,
                             ver: Default::default(),
                             token: Token(&[]),
                             code: Code::new(0, 1),
                             opts,
                             payload: Payload(&[]) };

    let path = msg.find_options(OptNumber(11));
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].value.0, b"a");
    assert_eq!(path[1].value.0, b"b");

    assert!(msg.find_options(OptNumber(4)).is_empty());
  }

  #[test]
  fn ack_echoes_id_and_token() {
    let token = [0xDE, 0xAD];
    let msg = Message::<8> { id: Id(77),
                             ty: Type::Con,
                             ver: Default::default(),
                             token: Token(&token),
                             code: Code::new(0, 2),
                             opts: Default::default(),
                             payload: Payload(b"ignored") };

    let ack = msg.ack();
    assert_eq!(ack.id, Id(77));
    assert_eq!(ack.token.0, &token);
    assert_eq!(ack.code, Code::new(0, 0));
    assert_eq!(ack.opts.len(), 0);
    assert_eq!(ack.payload.0.len(), 0);
  }
}
