use natter_msg::Message;

use crate::method::Method;
use crate::resp::ReplyError;

/// The most path segments an [`Endpoint`] may declare
/// (e.g. `/foo/bar` is 2 segments).
pub const MAX_SEGMENTS: usize = 8;

/// An endpoint's request handler.
///
/// Handlers receive the scratch buffer and the parsed request, and return
/// the response message to send. Anything the response borrows — a
/// rendered payload, the content-format bytes — must live in the scratch
/// buffer (or longer); see [`resp::reply_from_scratch`](crate::resp::reply_from_scratch)
/// for the usual way to do that.
pub type Handler<const OPT_CAP: usize = 8> =
  for<'s> fn(&'s mut [u8], &'s Message<'s, OPT_CAP>) -> Result<Message<'s, OPT_CAP>, ReplyError>;

/// A single entry in the server's endpoint table: requests whose method
/// and full path match are given to `handler`.
///
/// Endpoint tables are meant to be `static`:
///
/// ```
/// use natter::msg::Message;
/// use natter::{code, resp, ContentFormat, Endpoint, Method, ReplyKind};
///
/// fn ping<'s>(scratch: &'s mut [u8],
///             req: &'s Message<'s, 8>)
///             -> Result<Message<'s, 8>, resp::ReplyError> {
///   resp::reply(scratch,
///               req,
///               ReplyKind::Piggyback,
///               code::CONTENT,
///               ContentFormat::Text,
///               b"pong")
/// }
///
/// static ENDPOINTS: &[Endpoint] =
///   &[Endpoint::new(Method::GET, ping, &["ping"], Some("ct=0"))];
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Endpoint<const OPT_CAP: usize = 8> {
  /// The only [`Method`] this endpoint answers; requests that match the
  /// path with a different method are refused with 4.05.
  pub method: Method,

  /// See [`Handler`]
  pub handler: Handler<OPT_CAP>,

  /// The resource path, one string per segment
  /// (`&["sensors", "temp"]` serves `/sensors/temp`).
  pub path: &'static [&'static str],

  /// Link-format attributes advertised for this resource in
  /// `/.well-known/core` listings, e.g. `"ct=40"`.
  pub core_attr: Option<&'static str>,
}

impl<const OPT_CAP: usize> Endpoint<OPT_CAP> {
  /// Create an endpoint.
  ///
  /// # Panics
  /// At compile time (for the intended `static` tables) if `path` has
  /// more than [`MAX_SEGMENTS`] segments.
  pub const fn new(method: Method,
                   handler: Handler<OPT_CAP>,
                   path: &'static [&'static str],
                   core_attr: Option<&'static str>)
                   -> Self {
    assert!(path.len() <= MAX_SEGMENTS);

    Endpoint { method,
               handler,
               path,
               core_attr }
  }
}
