use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("{action} control is missing `{attribute}`"))]
  AttributeMissing {
    action: Action,
    attribute: &'static str,
  },
  #[snafu(display("malformed response from `{path}`"))]
  Deserialize {
    path: String,
    source: serde_json::Error,
  },
  #[snafu(display("{action} control has no `{selector}` element"))]
  ElementMissing {
    action: Action,
    selector: &'static str,
  },
  #[snafu(display("`{path}` rejected request: {message}"))]
  Rejected { path: String, message: String },
  #[snafu(display("request to `{path}` failed"))]
  Transport {
    path: String,
    source: Box<dyn std::error::Error>,
  },
}

impl Error {
  pub(crate) fn log(&self) {
    log::error!("{self}");

    for err in self.iter_chain().skip(1) {
      log::error!("because: {err}");
    }
  }
}
