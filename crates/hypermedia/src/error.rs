use super::*;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("invalid configuration in #{id}"))]
  Config {
    id: &'static str,
    source: serde_json::Error,
  },
  DocumentMissing,
  #[snafu(display("{operation} failed: {message}"))]
  Js {
    operation: &'static str,
    message: String,
  },
  #[snafu(display("request to {url} failed"))]
  Request { url: String, source: reqwest::Error },
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  WindowMissing,
}

impl Error {
  pub(crate) fn js(operation: &'static str) -> impl FnOnce(JsValue) -> Self {
    move |value| Self::Js {
      operation,
      message: describe(&value),
    }
  }
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}
