use {super::*, serde_json::Value};

pub(crate) struct Envelope {
  path: String,
  value: Value,
}

impl Envelope {
  fn rejection(&self) -> Option<String> {
    match self.value.get("error")? {
      Value::Null | Value::Bool(false) => None,
      Value::Number(number) if number.as_f64() == Some(0.0) => None,
      Value::String(message) if message.is_empty() => None,
      Value::String(message) => Some(message.clone()),
      other => Some(other.to_string()),
    }
  }
}

/// Parses a response body, turning a non-empty `error` field into
/// `Error::Rejected` before looking at the action-specific fields.
pub(crate) fn parse<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
  let envelope = Envelope {
    path: path.into(),
    value: serde_json::from_str(body).context(error::Deserialize { path })?,
  };

  if let Some(message) = envelope.rejection() {
    return error::Rejected {
      path: envelope.path,
      message,
    }
    .fail();
  }

  serde_json::from_value(envelope.value).context(error::Deserialize {
    path: envelope.path,
  })
}
