/// # Message Token
///
/// An opaque sequence of 0-8 bytes chosen by the client to correlate a
/// request with its response, independently of the message [`Id`].
///
/// The token is a view into the buffer the message was parsed from; to
/// reuse a peer's token after that buffer is recycled (e.g. to answer a
/// request on the next loop iteration), copy the bytes out first.
///
/// See [RFC7252 §5.3.1](https://datatracker.ietf.org/doc/html/rfc7252#section-5.3.1)
///
/// [`Id`]: super::Id
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Token<'a>(pub &'a [u8]);

impl<'a> Token<'a> {
  /// Take an arbitrary-length sequence of bytes and turn it into an
  /// 8-byte opaque token, stored in `out`.
  ///
  /// Currently uses the BLAKE2 hashing algorithm, but this may change in the future.
  ///
  /// ```
  /// use natter_msg::Token;
  ///
  /// let mut buf = [0u8; 8];
  /// let token = Token::opaque(b"sensors/temp", &mut buf);
  /// assert_eq!(token.0.len(), 8);
  /// ```
  pub fn opaque(data: &[u8], out: &'a mut [u8; 8]) -> Token<'a> {
    use blake2::digest::consts::U8;
    use blake2::{Blake2b, Digest};

    let mut digest = Blake2b::<U8>::new();
    digest.update(data);
    *out = digest.finalize().into();

    Token(&out[..])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn opaque_is_deterministic() {
    let (mut a, mut b) = ([0u8; 8], [0u8; 8]);
    assert_eq!(Token::opaque(b"foo", &mut a), Token::opaque(b"foo", &mut b));

    let mut c = [0u8; 8];
    assert_ne!(Token::opaque(b"foo", &mut a), Token::opaque(b"bar", &mut c));
  }
}
