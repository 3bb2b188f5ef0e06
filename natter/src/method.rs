use natter_msg::Code;

/// Request method
///
/// A thin wrapper around a class-0 [`Code`]; the detail is the method.
///
/// See [RFC7252 §12.1.1](https://datatracker.ietf.org/doc/html/rfc7252#section-12.1.1)
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Method(pub Code);

impl Method {
  /// 0.01 GET
  pub const GET: Method = Method(Code::new(0, 1));
  /// 0.02 POST
  pub const POST: Method = Method(Code::new(0, 2));
  /// 0.03 PUT
  pub const PUT: Method = Method(Code::new(0, 3));
  /// 0.04 DELETE
  pub const DELETE: Method = Method(Code::new(0, 4));
}

impl core::fmt::Display for Method {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.0 {
      | Code { class: 0, detail: 1 } => write!(f, "GET"),
      | Code { class: 0, detail: 2 } => write!(f, "POST"),
      | Code { class: 0, detail: 3 } => write!(f, "PUT"),
      | Code { class: 0, detail: 4 } => write!(f, "DELETE"),
      | Code { class, detail } => write!(f, "{}.{:02}", class, detail),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(format!("{}", Method::GET), "GET");
    assert_eq!(format!("{}", Method(Code::new(0, 7))), "0.07");
  }
}
