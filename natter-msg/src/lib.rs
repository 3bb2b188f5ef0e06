//! Low-level representation of CoAP messages, parsed from and serialized
//! into caller-owned byte buffers.
//!
//! The most notable item in `natter_msg` is [`Message`];
//! a CoAP message very close to the actual byte layout.
//!
//! ## Allocation
//! `Message` never allocates. Every dynamically-sized attribute of a
//! message — the token, each option value, the payload — is a *view*
//! (`&[u8]`) into the buffer the message was parsed from, and serializing
//! writes directly into a `&mut [u8]` you supply:
//!
//! ```
//! use natter_msg::Message;
//!
//! // CON GET, message ID 1, no token, no options, no payload
//! let wire: [u8; 4] = [0x40, 0x01, 0x00, 0x01];
//!
//! let msg: Message = Message::parse(&wire).unwrap();
//! assert_eq!(msg.id.0, 1);
//!
//! let mut out = [0u8; 64];
//! let n = msg.build(&mut out).unwrap();
//! assert_eq!(&out[..n], &wire);
//! ```
//!
//! This means a parsed `Message` cannot outlive the buffer it was parsed
//! from; copy the pieces you need to retain (e.g. a token you want to echo
//! in a later request) before reusing the buffer.
//!
//! ## Capacity
//! The number of options a message can hold is a const parameter
//! (`Message<'a, OPT_CAP>`, default 8) backed by a stack-allocated
//! [`tinyvec::ArrayVec`]. Parsing **stops** storing options once the table
//! is full; this truncation is deliberate and is not an error.

// x-release-please-start-version
#![doc(html_root_url = "https://docs.rs/natter-msg/0.3.1")]
// x-release-please-end
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
#![deny(missing_docs)]

mod cursor;

#[doc(hidden)]
pub mod from_bytes;

/// Message structs
pub mod msg;

#[doc(hidden)]
pub mod to_bytes;

#[doc(inline)]
pub use msg::*;
#[doc(inline)]
pub use to_bytes::MessageBuildError;
