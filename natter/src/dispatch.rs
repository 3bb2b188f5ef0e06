use natter_msg::{known, Message};

use crate::code;
use crate::content_format::ContentFormat;
use crate::endpoint::Endpoint;
use crate::link;
use crate::resp::{self, ReplyError, ReplyKind};

/// The server's endpoint table: a static, ordered list of
/// [`Endpoint`]s and the dispatcher that matches requests against them.
///
/// The table is read-only after construction, so dispatching is
/// reentrant; serialize access to each *scratch buffer* (one per worker),
/// not to the table.
#[derive(Clone, Copy, Debug)]
pub struct EndpointTable<'e, const OPT_CAP: usize = 8> {
  endpoints: &'e [Endpoint<OPT_CAP>],
}

impl<'e, const OPT_CAP: usize> EndpointTable<'e, OPT_CAP> {
  /// Create a table from an ordered slice of endpoints.
  ///
  /// Declaration order matters: the first full match wins.
  pub const fn new(endpoints: &'e [Endpoint<OPT_CAP>]) -> Self {
    EndpointTable { endpoints }
  }

  /// The endpoints this table dispatches to.
  pub const fn endpoints(&self) -> &'e [Endpoint<OPT_CAP>] {
    self.endpoints
  }

  /// Match `req` against the table and produce a response.
  ///
  /// Endpoints are scanned in declaration order. An endpoint matches when
  /// the request's Uri-Path options equal its path — same segment count,
  /// same bytes, same order — *and* the methods agree. The first full
  /// match has its handler invoked immediately and decides the response.
  ///
  /// A path match with the wrong method records 4.05 Method Not Allowed
  /// but **keeps scanning**: a later endpoint may serve the same path
  /// with the right method. When nothing matches, the reply is an
  /// empty-payload message carrying the accumulated status — 4.04 Not
  /// Found usually, 4.05 if some path matched, or 5.01 Not Implemented
  /// if the table has no endpoints at all.
  ///
  /// `kind` shapes the synthesized error reply (and is forwarded to
  /// nobody else: matched handlers pick their own reply kind).
  pub fn handle_request<'s>(&self,
                            scratch: &'s mut [u8],
                            req: &'s Message<'s, OPT_CAP>,
                            kind: ReplyKind)
                            -> Result<Message<'s, OPT_CAP>, ReplyError> {
    let mut status = if self.endpoints.is_empty() {
      code::NOT_IMPLEMENTED
    } else {
      code::NOT_FOUND
    };

    let segments = req.find_options(known::URI_PATH);
    let mut matched = None;

    for endpoint in self.endpoints {
      if segments.len() != endpoint.path.len() {
        continue;
      }

      let path_eq = segments.iter()
                            .zip(endpoint.path)
                            .all(|(seg, expected)| seg.value.0 == expected.as_bytes());

      if !path_eq {
        continue;
      }

      if req.code != endpoint.method.0 {
        status = code::METHOD_NOT_ALLOWED;
        continue;
      }

      matched = Some(endpoint);
      break;
    }

    match matched {
      | Some(endpoint) => {
        log::debug!("{} {:?} -> handler", endpoint.method, endpoint.path);
        (endpoint.handler)(scratch, req)
      },
      | None => {
        log::debug!("no endpoint matched, replying {}.{:02}", status.class, status.detail);
        resp::reply(scratch, req, kind, status, ContentFormat::None, &[])
      },
    }
  }

  /// Render this table as an `application/link-format` resource listing,
  /// the payload a `/.well-known/core` endpoint should serve.
  ///
  /// See [`link::write_link_format`].
  pub fn write_link_format(&self, buf: &mut [u8]) -> Result<usize, link::LinkFormatError> {
    link::write_link_format(self.endpoints, buf)
  }
}
