use tinyvec::ArrayVec;

use crate::msg::*;

/// Errors encounterable serializing a message to bytes
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum MessageBuildError {
  /// The output buffer cannot hold the serialized message
  BufferTooSmall,

  /// The token is longer than the 8 bytes the token-length field can express
  TokenTooLong(usize),

  /// The options were not sorted ascending by number.
  ///
  /// Encoding an out-of-order option would require a negative delta,
  /// which the wire format cannot represent.
  OptionsNotSorted,

  /// An option delta or value length exceeds the extended encoding's
  /// ceiling of 65535 + 269
  OptionTooBig,
}

/// A write position into a caller-owned output buffer, refusing writes
/// past the end.
struct OutBuf<'b> {
  buf: &'b mut [u8],
  len: usize,
}

impl<'b> OutBuf<'b> {
  fn new(buf: &'b mut [u8]) -> Self {
    OutBuf { buf, len: 0 }
  }

  fn push(&mut self, byte: u8) -> Result<(), MessageBuildError> {
    match self.buf.get_mut(self.len) {
      | Some(slot) => {
        *slot = byte;
        self.len += 1;
        Ok(())
      },
      | None => Err(MessageBuildError::BufferTooSmall),
    }
  }

  fn extend(&mut self, bytes: &[u8]) -> Result<(), MessageBuildError> {
    match self.buf.get_mut(self.len..self.len + bytes.len()) {
      | Some(dst) => {
        dst.copy_from_slice(bytes);
        self.len += bytes.len();
        Ok(())
      },
      | None => Err(MessageBuildError::BufferTooSmall),
    }
  }
}

/// Encode an option delta or value length as a (nibble, extension bytes)
/// pair, the inverse of the 13/14 extended-value rule used when parsing.
pub(crate) fn opt_len_or_delta(val: u32)
                               -> Result<(u8, ArrayVec<[u8; 2]>), MessageBuildError> {
  let mut ext = ArrayVec::new();

  match val {
    | n if n < 13 => Ok((n as u8, ext)),
    | n if n < 269 => {
      ext.push((n - 13) as u8);
      Ok((13, ext))
    },
    | n if n <= 65535 + 269 => {
      ext.extend_from_slice(&((n - 269) as u16).to_be_bytes());
      Ok((14, ext))
    },
    | _ => Err(MessageBuildError::OptionTooBig),
  }
}

impl From<Byte1> for u8 {
  fn from(b: Byte1) -> u8 {
    let ver = b.ver.0 << 6;
    let ty = u8::from(b.ty) << 4;
    let tkl = b.tkl;

    ver | ty | tkl
  }
}

impl<'a, const OPT_CAP: usize> Message<'a, OPT_CAP> {
  /// Serialize this message into `buf`, returning the number of bytes
  /// written.
  ///
  /// Capacity is checked incrementally (header + token, then each option,
  /// then marker + payload), so a too-small buffer fails with
  /// [`MessageBuildError::BufferTooSmall`] without writing past the end.
  /// Size the buffer with [`Message::wire_size`] when in doubt.
  ///
  /// The payload marker is only written when the payload is non-empty.
  ///
  /// ```
  /// use natter_msg::{Code, Id, Message, Payload, Token, Type, Version};
  ///
  /// let msg = Message::<8> { id: Id(1),
  ///                          ty: Type::Con,
  ///                          ver: Version::default(),
  ///                          token: Token(&[]),
  ///                          code: Code::new(0, 1),
  ///                          opts: Default::default(),
  ///                          payload: Payload(&[]) };
  ///
  /// let mut buf = [0u8; 16];
  /// let n = msg.build(&mut buf).unwrap();
  /// assert_eq!(&buf[..n], &[0x40, 0x01, 0x00, 0x01]);
  /// ```
  pub fn build(&self, buf: &mut [u8]) -> Result<usize, MessageBuildError> {
    if self.token.0.len() > 8 {
      return Err(MessageBuildError::TokenTooLong(self.token.0.len()));
    }

    let mut out = OutBuf::new(buf);

    out.push(Byte1 { ver: self.ver,
                     ty: self.ty,
                     tkl: self.token.0.len() as u8 }.into())?;
    out.push(self.code.into())?;
    out.extend(&<[u8; 2]>::from(self.id))?;
    out.extend(self.token.0)?;

    let mut running = OptNumber(0);

    for opt in self.opts.iter() {
      let delta = opt.number
                     .0
                     .checked_sub(running.0)
                     .ok_or(MessageBuildError::OptionsNotSorted)?;

      let (delta_nibble, delta_ext) = opt_len_or_delta(delta)?;
      let (len_nibble, len_ext) = opt_len_or_delta(opt.value.0.len() as u32)?;

      out.push(delta_nibble << 4 | len_nibble)?;
      out.extend(&delta_ext)?;
      out.extend(&len_ext)?;
      out.extend(opt.value.0)?;

      running = opt.number;
    }

    if !self.payload.0.is_empty() {
      out.push(0xFF)?;
      out.extend(self.payload.0)?;
    }

    Ok(out.len)
  }

  /// The exact number of bytes [`Message::build`] will write for this
  /// message.
  pub fn wire_size(&self) -> usize {
    fn ext_size(val: u32) -> usize {
      match val {
        | n if n < 13 => 0,
        | n if n < 269 => 1,
        | _ => 2,
      }
    }

    let mut size = 4 + self.token.0.len();
    let mut running = 0u32;

    for opt in self.opts.iter() {
      let delta = opt.number.0.saturating_sub(running);
      size += 1 + ext_size(delta) + ext_size(opt.value.0.len() as u32) + opt.value.0.len();
      running = opt.number.0;
    }

    if !self.payload.0.is_empty() {
      size += 1 + self.payload.0.len();
    }

    size
  }
}
