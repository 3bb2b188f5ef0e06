//! Rendering and scanning of `application/link-format` (RFC 6690)
//! resource listings — enough of it for `/.well-known/core` discovery:
//! `</sensors/temp>;rt=temp;ct=0,</actuators/led>`.

use crate::endpoint::Endpoint;
use crate::resp::ReplyError;

/// Errors encounterable rendering a link-format listing
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
pub enum LinkFormatError {
  /// The output buffer cannot hold the rendered listing
  BufferTooSmall,
}

impl From<LinkFormatError> for ReplyError {
  fn from(_: LinkFormatError) -> Self {
    ReplyError::ScratchTooSmall
  }
}

fn push(buf: &mut [u8], len: &mut usize, bytes: &[u8]) -> Result<(), LinkFormatError> {
  match buf.get_mut(*len..*len + bytes.len()) {
    | Some(dst) => {
      dst.copy_from_slice(bytes);
      *len += bytes.len();
      Ok(())
    },
    | None => Err(LinkFormatError::BufferTooSmall),
  }
}

/// Render `endpoints` as a link-format listing into `buf`, returning the
/// number of bytes written.
///
/// Each endpoint becomes `</seg/seg>`, followed by `;attr` when it
/// declares a [`core_attr`](Endpoint::core_attr); entries are
/// comma-separated.
pub fn write_link_format<const OPT_CAP: usize>(endpoints: &[Endpoint<OPT_CAP>],
                                               buf: &mut [u8])
                                               -> Result<usize, LinkFormatError> {
  let mut len = 0;

  for (ix, endpoint) in endpoints.iter().enumerate() {
    if ix > 0 {
      push(buf, &mut len, b",")?;
    }

    push(buf, &mut len, b"<")?;

    for seg in endpoint.path {
      push(buf, &mut len, b"/")?;
      push(buf, &mut len, seg.as_bytes())?;
    }

    push(buf, &mut len, b">")?;

    if let Some(attr) = endpoint.core_attr {
      push(buf, &mut len, b";")?;
      push(buf, &mut len, attr.as_bytes())?;
    }
  }

  Ok(len)
}

/// Scan a link-format listing for the first link whose `rt` attribute is
/// exactly `rt`, returning its href (the text between `<` and `>`).
///
/// The returned href is a view into `links`; feed it to [`segments`] to
/// build Uri-Path options from it.
///
/// ```
/// use natter::link;
///
/// let links = b"</fw>;rt=firmware,</sensors/temp>;rt=temp;ct=0";
///
/// assert_eq!(link::find_link(links, "temp"), Some(&b"/sensors/temp"[..]));
/// assert_eq!(link::find_link(links, "hygro"), None);
/// ```
pub fn find_link<'a>(links: &'a [u8], rt: &str) -> Option<&'a [u8]> {
  links.split(|b| *b == b',').find_map(|entry| {
                               let close = entry.iter().position(|b| *b == b'>')?;

                               if entry.first() != Some(&b'<') {
                                 return None;
                               }

                               let href = &entry[1..close];

                               let rt_matches =
                                 entry[close + 1..].split(|b| *b == b';')
                                                   .any(|param| {
                                                     param.len() == 3 + rt.len()
                                                     && &param[..3] == b"rt="
                                                     && &param[3..] == rt.as_bytes()
                                                   });

                               if rt_matches {
                                 Some(href)
                               } else {
                                 None
                               }
                             })
}

/// Iterate the path segments of an href: `/sensors/temp` yields
/// `sensors`, then `temp`.
pub fn segments(href: &[u8]) -> impl Iterator<Item = &[u8]> {
  href.split(|b| *b == b'/').filter(|seg| !seg.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::method::Method;
  use crate::resp;
  use crate::resp::ReplyKind;
  use crate::{code, ContentFormat};
  use natter_msg::Message;

  fn nop<'s>(scratch: &'s mut [u8],
             req: &'s Message<'s, 8>)
             -> Result<Message<'s, 8>, ReplyError> {
    resp::reply(scratch,
                req,
                ReplyKind::Piggyback,
                code::CONTENT,
                ContentFormat::None,
                &[])
  }

  static ENDPOINTS: &[Endpoint] =
    &[Endpoint::new(Method::GET, nop, &[".well-known", "core"], Some("ct=40")),
      Endpoint::new(Method::GET, nop, &["sensors", "temp"], Some("rt=temp;ct=0")),
      Endpoint::new(Method::POST, nop, &["actuators", "led"], None)];

  #[test]
  fn renders_paths_and_attributes() {
    let mut buf = [0u8; 128];
    let n = write_link_format(ENDPOINTS, &mut buf).unwrap();

    assert_eq!(core::str::from_utf8(&buf[..n]).unwrap(),
               "</.well-known/core>;ct=40,</sensors/temp>;rt=temp;ct=0,</actuators/led>");
  }

  #[test]
  fn render_fails_on_small_buffer() {
    let mut buf = [0u8; 16];
    assert_eq!(write_link_format(ENDPOINTS, &mut buf),
               Err(LinkFormatError::BufferTooSmall));
  }

  #[test]
  fn rendered_listing_is_discoverable() {
    let mut buf = [0u8; 128];
    let n = write_link_format(ENDPOINTS, &mut buf).unwrap();

    let href = find_link(&buf[..n], "temp").unwrap();
    assert_eq!(href, b"/sensors/temp");

    let segs: Vec<&[u8]> = segments(href).collect();
    assert_eq!(segs, [&b"sensors"[..], &b"temp"[..]]);
  }

  #[test]
  fn find_link_wants_exact_rt() {
    let links = b"</a>;rt=temperature,</b>;rt=temp";
    assert_eq!(find_link(links, "temp"), Some(&b"/b"[..]));
  }

  #[test]
  fn find_link_tolerates_junk() {
    assert_eq!(find_link(b"", "temp"), None);
    assert_eq!(find_link(b"no brackets here", "temp"), None);
    assert_eq!(find_link(b"</unclosed;rt=temp", "temp"), None);
  }
}
