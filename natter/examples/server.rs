//! A small CoAP server: a discoverable temperature resource plus the
//! `/.well-known/core` listing, served over a blocking UDP socket.
//!
//! ```text
//! cargo run --example server
//! coap get coap://localhost/.well-known/core
//! coap get coap://localhost/sensors/temp
//! ```

use std::net::UdpSocket;

use natter::msg::Message;
use natter::{code, resp, ContentFormat, Endpoint, EndpointTable, Method, ReplyKind};

static ENDPOINTS: &[Endpoint] = &[Endpoint::new(Method::GET,
                                                handle_core,
                                                &[".well-known", "core"],
                                                Some("ct=40")),
                                  Endpoint::new(Method::GET,
                                                handle_temp,
                                                &["sensors", "temp"],
                                                Some("rt=temp;ct=0"))];

static TABLE: EndpointTable = EndpointTable::new(ENDPOINTS);

fn read_temperature() -> f32 {
  22.5
}

fn handle_core<'s>(scratch: &'s mut [u8],
                   req: &'s Message<'s, 8>)
                   -> Result<Message<'s, 8>, resp::ReplyError> {
  let n = TABLE.write_link_format(&mut scratch[2..])?;

  resp::reply_from_scratch(scratch,
                           n,
                           req,
                           ReplyKind::Piggyback,
                           code::CONTENT,
                           ContentFormat::LinkFormat)
}

fn handle_temp<'s>(scratch: &'s mut [u8],
                   req: &'s Message<'s, 8>)
                   -> Result<Message<'s, 8>, resp::ReplyError> {
  let text = format!("{:.1}", read_temperature());
  let n = text.len();
  scratch[2..2 + n].copy_from_slice(text.as_bytes());

  resp::reply_from_scratch(scratch,
                           n,
                           req,
                           ReplyKind::Piggyback,
                           code::CONTENT,
                           ContentFormat::Text)
}

fn main() -> std::io::Result<()> {
  simple_logger::init_with_level(log::Level::Debug).unwrap();

  let socket = UdpSocket::bind("0.0.0.0:5683")?;
  log::info!("serving CoAP on {}", socket.local_addr()?);

  let mut packet = [0u8; 256];
  let mut scratch = [0u8; 256];
  let mut out = [0u8; 256];

  loop {
    let (n, peer) = socket.recv_from(&mut packet)?;

    let req = match Message::parse(&packet[..n]) {
      | Ok(req) => req,
      | Err(e) => {
        log::warn!("malformed message from {}: {:?}", peer, e);
        continue;
      },
    };

    let rsp = match TABLE.handle_request(&mut scratch, &req, ReplyKind::Piggyback) {
      | Ok(rsp) => rsp,
      | Err(e) => {
        log::warn!("could not build a reply: {:?}", e);
        continue;
      },
    };

    let n = match rsp.build(&mut out) {
      | Ok(n) => n,
      | Err(e) => {
        log::warn!("could not serialize the reply: {:?}", e);
        continue;
      },
    };

    socket.send_to(&out[..n], peer)?;
  }
}
