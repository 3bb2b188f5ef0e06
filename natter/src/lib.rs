//! Endpoint routing & response building for embedded CoAP servers.
//!
//! This crate sits on top of [`natter_msg`]'s zero-copy [`Message`] and
//! adds the pieces a tiny CoAP node needs to answer requests:
//!
//! - a static, compiled-in [`Endpoint`] table and a linear
//!   [`EndpointTable::handle_request`] dispatcher
//! - reply builders ([`resp::reply`], [`resp::reply_from_scratch`]) for
//!   piggy-backed and separate responses
//! - request [`Method`]s and response [`code`]s
//! - `application/link-format` helpers ([`link`]) for
//!   `/.well-known/core` style resource discovery
//!
//! ```
//! use natter::msg::Message;
//! use natter::{code, resp, ContentFormat, Endpoint, EndpointTable, Method, ReplyKind};
//!
//! fn hello<'s>(scratch: &'s mut [u8],
//!              req: &'s Message<'s, 8>)
//!              -> Result<Message<'s, 8>, resp::ReplyError> {
//!   resp::reply(scratch,
//!               req,
//!               ReplyKind::Piggyback,
//!               code::CONTENT,
//!               ContentFormat::Text,
//!               b"hello, world!")
//! }
//!
//! static ENDPOINTS: &[Endpoint] =
//!   &[Endpoint::new(Method::GET, hello, &["hello"], Some("ct=0"))];
//!
//! static TABLE: EndpointTable = EndpointTable::new(ENDPOINTS);
//!
//! // GET /hello
//! let wire = [0x40, 0x01, 0x00, 0x01, 0xB5, b'h', b'e', b'l', b'l', b'o'];
//! let req = Message::parse(&wire).unwrap();
//!
//! let mut scratch = [0u8; 64];
//! let rsp = TABLE.handle_request(&mut scratch, &req, ReplyKind::Piggyback)
//!                .unwrap();
//!
//! assert_eq!(rsp.code, code::CONTENT);
//! assert_eq!(rsp.payload.0, b"hello, world!");
//! ```
//!
//! The dispatcher performs no I/O and holds no mutable state: feed it a
//! parsed request plus a scratch buffer and it returns a response message
//! to serialize. Sockets, timeouts and retransmission stay with you.

// x-release-please-start-version
#![doc(html_root_url = "https://docs.rs/natter/0.5.0")]
// x-release-please-end
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
#![deny(missing_docs)]

pub use natter_msg as msg;

/// Response codes
pub mod code;

/// Content formats
pub mod content_format;

/// Endpoint table & request dispatch
pub mod dispatch;

/// Endpoints
pub mod endpoint;

/// `application/link-format` rendering & scanning
pub mod link;

/// Request methods
pub mod method;

/// Response builders
pub mod resp;

#[doc(inline)]
pub use content_format::ContentFormat;
#[doc(inline)]
pub use dispatch::EndpointTable;
#[doc(inline)]
pub use endpoint::{Endpoint, Handler, MAX_SEGMENTS};
#[doc(inline)]
pub use method::Method;
#[doc(inline)]
pub use resp::{ReplyError, ReplyKind};
