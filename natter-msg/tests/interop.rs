//! Differential check against `coap-lite`: messages we build must parse
//! under an independent codec, and re-serializing them there must
//! reproduce our bytes.
#![cfg(feature = "std")]

use coap_lite::Packet;
use natter_msg::*;

fn build(msg: &Message<'_, 8>) -> Vec<u8> {
  let mut buf = [0u8; 256];
  let n = msg.build(&mut buf).unwrap();
  buf[..n].to_vec()
}

#[test]
fn coap_lite_accepts_our_request() {
  let mut opts = tinyvec::ArrayVec::default();
  opts.push(Opt { number: known::URI_PATH,
                  value: OptValue(b"sensors") });
  opts.push(Opt { number: known::URI_PATH,
                  value: OptValue(b"temp") });

  let msg = Message::<8> { id: Id(0x1234),
                           ty: Type::Con,
                           ver: Version(1),
                           token: Token(&[0xCA, 0xFE]),
                           code: Code::new(0, 1),
                           opts,
                           payload: Payload(&[]) };

  let wire = build(&msg);
  let theirs = Packet::from_bytes(&wire).unwrap();

  assert_eq!(theirs.header.message_id, 0x1234);
  assert_eq!(theirs.get_token(), &[0xCA, 0xFE]);
  assert!(theirs.payload.is_empty());

  assert_eq!(theirs.to_bytes().unwrap(), wire);
}

#[test]
fn coap_lite_accepts_our_response() {
  let mut opts = tinyvec::ArrayVec::default();
  opts.push(Opt { number: known::CONTENT_FORMAT,
                  value: OptValue(&[0x00, 0x00]) });

  let msg = Message::<8> { id: Id(77),
                           ty: Type::Ack,
                           ver: Version(1),
                           token: Token(&[1]),
                           code: Code::new(2, 5),
                           opts,
                           payload: Payload(b"22.5") };

  let wire = build(&msg);
  let theirs = Packet::from_bytes(&wire).unwrap();

  assert_eq!(theirs.header.message_id, 77);
  assert_eq!(theirs.payload, b"22.5");

  assert_eq!(theirs.to_bytes().unwrap(), wire);
}

#[test]
fn we_accept_coap_lite_messages() {
  let mut theirs = Packet::new();
  theirs.header.message_id = 42;
  theirs.set_token(vec![9, 9, 9]);
  theirs.payload = b"pong".to_vec();

  let wire = theirs.to_bytes().unwrap();
  let msg = Message::<8>::parse(&wire).unwrap();

  assert_eq!(msg.id, Id(42));
  assert_eq!(msg.token.0, &[9, 9, 9]);
  assert_eq!(msg.payload.0, b"pong");
}
