use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Chat poll interval, zero disables polling.
  pub chat_poll_ms: u64,
  pub csrf_cookie: String,
  pub csrf_header: String,
  pub dismiss_after_ms: u64,
  pub liked_color: String,
  pub remove_after_ms: u64,
  pub unliked_fill: String,
  pub unliked_stroke: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      chat_poll_ms: 3000,
      csrf_cookie: "csrftoken".into(),
      csrf_header: "X-CSRFToken".into(),
      dismiss_after_ms: 5000,
      liked_color: "#ed4956".into(),
      remove_after_ms: 300,
      unliked_fill: "none".into(),
      unliked_stroke: "currentColor".into(),
    }
  }
}

impl Config {
  pub fn from_json(json: &str) -> serde_json::Result<Self> {
    serde_json::from_str(json)
  }

  pub fn chat_poll(&self) -> Option<Duration> {
    (self.chat_poll_ms > 0).then(|| Duration::from_millis(self.chat_poll_ms))
  }

  pub fn dismiss_after(&self) -> Duration {
    Duration::from_millis(self.dismiss_after_ms)
  }

  pub fn remove_after(&self) -> Duration {
    Duration::from_millis(self.remove_after_ms)
  }
}
