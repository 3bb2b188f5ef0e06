pub use natter_msg::Code;

macro_rules! code {
  (#[doc = $doc:expr] $name:ident = $c:literal . $d:literal) => {
    #[doc = $doc]
    #[allow(clippy::zero_prefixed_literal)]
    pub const $name: Code = Code::new($c, $d);
  };
}

code!(#[doc = "0.00 Empty; the code carried by a bare acknowledgement"]
      EMPTY = 0 . 00);

// 2.xx
code!(#[doc = "2.01 Created"]
      CREATED = 2 . 01);
code!(#[doc = "2.02 Deleted"]
      DELETED = 2 . 02);
code!(#[doc = "2.03 Valid"]
      VALID = 2 . 03);
code!(#[doc = "2.04 Changed"]
      CHANGED = 2 . 04);
code!(#[doc = "2.05 Content"]
      CONTENT = 2 . 05);

// 4.xx
code!(#[doc = "4.00 Bad Request"]
      BAD_REQUEST = 4 . 00);
code!(#[doc = "4.01 Unauthorized"]
      UNAUTHORIZED = 4 . 01);
code!(#[doc = "4.02 Bad Option"]
      BAD_OPTION = 4 . 02);
code!(#[doc = "4.03 Forbidden"]
      FORBIDDEN = 4 . 03);
code!(#[doc = "4.04 Not Found"]
      NOT_FOUND = 4 . 04);
code!(#[doc = "4.05 Method Not Allowed"]
      METHOD_NOT_ALLOWED = 4 . 05);
code!(#[doc = "4.06 Not Acceptable"]
      NOT_ACCEPTABLE = 4 . 06);

// 5.xx
code!(#[doc = "5.00 Internal Server Error"]
      INTERNAL_SERVER_ERROR = 5 . 00);
code!(#[doc = "5.01 Not Implemented"]
      NOT_IMPLEMENTED = 5 . 01);
code!(#[doc = "5.03 Service Unavailable"]
      SERVICE_UNAVAILABLE = 5 . 03);
