//! Resource discovery: GET `/.well-known/core`, pick the link advertised
//! with the wanted `rt` attribute, then GET the discovered resource.
//!
//! ```text
//! cargo run --example discover -- 127.0.0.1:5683 temp
//! ```

use std::net::UdpSocket;
use std::time::Duration;

use natter::link;
use natter::msg::{known, Id, Message, Opt, OptValue, Payload, Token, Type, Version};
use natter::Method;
use rand::Rng;

fn main() -> std::io::Result<()> {
  simple_logger::init_with_level(log::Level::Info).unwrap();

  let target = std::env::args().nth(1)
                               .unwrap_or_else(|| "127.0.0.1:5683".to_string());
  let rt = std::env::args().nth(2).unwrap_or_else(|| "temp".to_string());

  let socket = UdpSocket::bind("0.0.0.0:0")?;
  socket.set_read_timeout(Some(Duration::from_secs(2)))?;

  // correlate request & response by a token derived from the resource type
  let mut token_buf = [0u8; 8];
  let token = Token::opaque(rt.as_bytes(), &mut token_buf);

  let mut opts = tinyvec::ArrayVec::default();
  opts.push(Opt { number: known::URI_PATH,
                  value: OptValue(b".well-known") });
  opts.push(Opt { number: known::URI_PATH,
                  value: OptValue(b"core") });

  let discover = Message::<8> { id: Id(rand::thread_rng().gen()),
                                ty: Type::Non,
                                ver: Version::default(),
                                token,
                                code: Method::GET.0,
                                opts,
                                payload: Payload(&[]) };

  let mut buf = [0u8; 128];
  let n = discover.build(&mut buf).expect("discovery request fits");
  socket.send_to(&buf[..n], &target)?;
  log::info!("GET /.well-known/core -> {}", target);

  let mut rcv = [0u8; 1024];
  let (n, _) = socket.recv_from(&mut rcv)?;
  let rsp = Message::<8>::parse(&rcv[..n]).expect("well-formed listing");

  if rsp.token != token {
    log::warn!("listing echoes a different token; proceeding anyway");
  }

  let href = match link::find_link(rsp.payload.0, &rt) {
    | Some(href) => href,
    | None => {
      log::error!("no link advertises rt={}", rt);
      return Ok(());
    },
  };

  log::info!("found {}", String::from_utf8_lossy(href));

  let mut opts = tinyvec::ArrayVec::default();

  for seg in link::segments(href) {
    opts.push(Opt { number: known::URI_PATH,
                    value: OptValue(seg) });
  }

  let req = Message::<8> { id: Id(rand::thread_rng().gen()),
                           ty: Type::Con,
                           ver: Version::default(),
                           token,
                           code: Method::GET.0,
                           opts,
                           payload: Payload(&[]) };

  let n = req.build(&mut buf).expect("request fits");
  socket.send_to(&buf[..n], &target)?;

  let mut rcv2 = [0u8; 256];
  let (n, _) = socket.recv_from(&mut rcv2)?;
  let reading = Message::<8>::parse(&rcv2[..n]).expect("well-formed response");

  log::info!("{} = {}",
             String::from_utf8_lossy(href),
             String::from_utf8_lossy(reading.payload.0));

  Ok(())
}
