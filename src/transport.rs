use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Method {
  Get,
  Post,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
  pub body: Option<String>,
  pub headers: Vec<(String, String)>,
  pub method: Method,
  /// Path relative to the site root, including any query string.
  pub path: String,
}

impl Request {
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(header, _)| header.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

/// Sends a single request and yields the response body. Status codes are not
/// inspected, error responses carry their reason in the body.
pub trait Transport: 'static {
  type Error: std::error::Error + 'static;

  async fn send(&self, request: Request) -> Result<String, Self::Error>;
}
