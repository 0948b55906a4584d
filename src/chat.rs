use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Message {
  pub content: String,
  pub created_at: String,
  pub id: u64,
  pub is_sender: bool,
  pub sender_username: String,
  #[serde(default)]
  pub time_display: Option<String>,
}

/// The send endpoint's echo of a stored message.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Sent {
  pub content: String,
  pub created_at: String,
  pub message_id: u64,
  pub sender_username: String,
}

#[derive(Debug, Deserialize)]
struct Messages {
  messages: Vec<Message>,
}

fn send_path(username: &str) -> String {
  format!("/send-message/{}/", segment(username))
}

fn fetch_path(username: &str, after: Option<u64>) -> String {
  let path = format!("/get-messages/{}/", segment(username));
  match after {
    Some(id) => format!("{path}?last_message_id={id}"),
    None => path,
  }
}

fn message_ids<E: Element>(log: &E) -> Vec<u64> {
  log
    .descendants_with_class(class::MESSAGE)
    .iter()
    .filter_map(|message| message.attribute(attribute::MESSAGE_ID)?.parse().ok())
    .collect()
}

/// The newest message id fetched into `log`. Messages rendered with the page
/// count as fetched; echoes of sent messages do not.
fn cursor<E: Element>(log: &E) -> Option<u64> {
  match log.attribute(attribute::LAST_MESSAGE_ID) {
    Some(id) => id.parse().ok(),
    None => message_ids(log).into_iter().max(),
  }
}

fn set_cursor<E: Element>(log: &E, id: Option<u64>) {
  if let Some(id) = id {
    log.set_attribute(attribute::LAST_MESSAGE_ID, &id.to_string());
  }
}

/// Appends a message to `log` unless one with the same id is already there.
fn append<D: Document>(
  document: &D,
  log: &D::Element,
  id: u64,
  content: &str,
  time: &str,
  sent: bool,
) -> bool {
  if message_ids(log).contains(&id) {
    return false;
  }

  let message = document.create_element("div");
  message.add_class(class::MESSAGE);
  message.add_class(if sent { class::SENT } else { class::RECEIVED });
  message.set_attribute(attribute::MESSAGE_ID, &id.to_string());

  let body = document.create_element("div");
  body.add_class(class::MESSAGE_CONTENT);
  body.set_text(content);
  message.append(&body);

  let timestamp = document.create_element("span");
  timestamp.add_class(class::MESSAGE_TIME);
  timestamp.set_text(time);
  message.append(&timestamp);

  log.append(&message);

  true
}

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  fn chat_log(&self, username: &str) -> Option<D::Element> {
    self
      .document
      .element_with(class::CHAT_MESSAGES, attribute::USERNAME, username)
  }

  /// Sends the content of `form`'s message field to `username`. A blank
  /// message is not sent and yields `None`.
  pub async fn send_message(&self, username: &str, form: &D::Element) -> Result<Option<Sent>> {
    let input = form.field(attribute::CONTENT).context(error::ElementMissing {
      action: Action::SendMessage,
      selector: "[name=content]",
    })?;

    let content = input.value().trim().to_owned();

    if content.is_empty() {
      return Ok(None);
    }

    let sent = self
      .post::<Sent>(
        send_path(username),
        "application/x-www-form-urlencoded",
        Some(format!("content={}", urlencoding::encode(&content))),
      )
      .await?;

    input.set_value("");

    if let Some(log) = self.chat_log(username) {
      set_cursor(&log, cursor(&log));
      if append(
        &self.document,
        &log,
        sent.message_id,
        &sent.content,
        &sent.created_at,
        true,
      ) {
        log.scroll_to_bottom();
      }
    }

    Ok(Some(sent))
  }

  /// Fetches messages newer than the last fetched one and appends those not
  /// already in `log`. Returns the number of messages appended.
  pub async fn fetch_messages(&self, username: &str, log: &D::Element) -> Result<usize> {
    let after = cursor(log);

    let Messages { messages } = self.get(fetch_path(username, after)).await?;

    set_cursor(log, messages.iter().map(|message| message.id).chain(after).max());

    let mut appended = 0;

    for message in messages {
      let time = message.time_display.as_ref().unwrap_or(&message.created_at);
      if append(
        &self.document,
        log,
        message.id,
        &message.content,
        time,
        message.is_sender,
      ) {
        appended += 1;
      }
    }

    if appended > 0 {
      log.scroll_to_bottom();
    }

    Ok(appended)
  }

  pub fn poll_chats(self: &Rc<Self>) -> usize {
    let Some(interval) = self.config.chat_poll() else {
      return 0;
    };

    let mut polled = 0;

    for chat in self.document.elements(class::CHAT_MESSAGES) {
      let Some(username) = chat.attribute(attribute::USERNAME) else {
        log::warn!("chat log without `{}`", attribute::USERNAME);
        continue;
      };
      self.schedule_poll(interval, username, chat);
      polled += 1;
    }

    polled
  }

  // next poll is scheduled only after this one resolves
  fn schedule_poll(self: &Rc<Self>, interval: Duration, username: String, log: D::Element) {
    let client = self.clone();
    self.scheduler.delay(
      interval,
      Box::new(move || {
        let task = client.clone();
        client.scheduler.spawn(Box::pin(async move {
          if let Err(err) = task.fetch_messages(&username, &log).await {
            err.log();
          }
          task.schedule_poll(interval, username, log);
        }));
      }),
    );
  }
}
