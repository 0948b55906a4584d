use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Like {
  pub is_liked: bool,
  pub likes_count: u64,
}

impl Like {
  pub fn path(post_id: &str) -> String {
    format!("/post/{}/like/", segment(post_id))
  }

  fn render<D: Document>(self, config: &Config, document: &D, post_id: &str, button: &D::Element) {
    let (fill, stroke) = if self.is_liked {
      button.add_class(class::LIKED);
      (&config.liked_color, &config.liked_color)
    } else {
      button.remove_class(class::LIKED);
      (&config.unliked_fill, &config.unliked_stroke)
    };

    if let Some(icon) = button.descendant("svg") {
      icon.set_attribute("fill", fill);
      icon.set_attribute("stroke", stroke);
    }

    if let Some(count) = document.element_with(class::LIKES_COUNT, attribute::POST_ID, post_id) {
      count.set_text(&self.likes_count.to_string());
    }
  }
}

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  /// Toggles the caller's like on `post_id` and reconciles `button` and the
  /// post's like count with the server's answer.
  pub async fn like(&self, post_id: &str, button: &D::Element) -> Result<Like> {
    let like = self
      .post::<Like>(Like::path(post_id), "application/json", None)
      .await?;

    like.render(&self.config, &self.document, post_id, button);

    Ok(like)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn post(harness: &Harness, likes: &str) -> (FakeElement, FakeElement, FakeElement) {
    let article = harness.document.add("article", &[]);
    let button = harness
      .document
      .element("a", &[("class", "like-btn"), ("data-post-id", "7")]);
    let icon = harness
      .document
      .element("svg", &[("fill", "none"), ("stroke", "currentColor")]);
    button.append(&icon);
    article.append(&button);
    let count = harness
      .document
      .element("span", &[("class", "likes-count"), ("data-post-id", "7")]);
    count.set_text(likes);
    article.append(&count);
    (button, icon, count)
  }

  #[test]
  fn path() {
    assert_eq!(Like::path("42"), "/post/42/like/");
  }

  #[test]
  fn liked() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, icon, count) = post(&harness, "41");

    harness
      .transport
      .reply(r#"{"is_liked": true, "likes_count": 42}"#);

    let like = harness
      .block_on(harness.client.like("7", &button))
      .unwrap();

    assert_eq!(
      like,
      Like {
        is_liked: true,
        likes_count: 42
      }
    );
    assert!(button.has_class("liked"));
    assert_eq!(icon.attribute("fill").as_deref(), Some("#ed4956"));
    assert_eq!(icon.attribute("stroke").as_deref(), Some("#ed4956"));
    assert_eq!(count.text(), "42");

    let request = harness.transport.single();
    assert_eq!(request.path, "/post/7/like/");
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("X-CSRFToken"), Some("XYZ"));
  }

  #[test]
  fn unliked() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, icon, count) = post(&harness, "1");
    button.add_class("liked");
    icon.set_attribute("fill", "#ed4956");
    icon.set_attribute("stroke", "#ed4956");

    harness
      .transport
      .reply(r#"{"is_liked": false, "likes_count": 0}"#);

    harness
      .block_on(harness.client.like("7", &button))
      .unwrap();

    assert!(!button.has_class("liked"));
    assert_eq!(icon.attribute("fill").as_deref(), Some("none"));
    assert_eq!(icon.attribute("stroke").as_deref(), Some("currentColor"));
    assert_eq!(count.text(), "0");
  }

  #[test]
  fn state_follows_response_not_prior_state() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, icon, _count) = post(&harness, "5");
    button.add_class("liked");

    harness
      .transport
      .reply(r#"{"is_liked": true, "likes_count": 5}"#);

    harness
      .block_on(harness.client.like("7", &button))
      .unwrap();

    assert!(button.has_class("liked"));
    assert_eq!(icon.attribute("fill").as_deref(), Some("#ed4956"));
  }

  #[test]
  fn button_without_icon() {
    let harness = Harness::new("csrftoken=XYZ");
    let button = harness
      .document
      .add("button", &[("class", "like-btn"), ("data-post-id", "3")]);

    harness
      .transport
      .reply(r#"{"is_liked": true, "likes_count": 1}"#);

    harness
      .block_on(harness.client.like("3", &button))
      .unwrap();

    assert!(button.has_class("liked"));
  }

  #[test]
  fn count_is_scoped_to_post() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, _icon, count) = post(&harness, "1");
    let other = harness
      .document
      .add("span", &[("class", "likes-count"), ("data-post-id", "8")]);
    other.set_text("99");

    harness
      .transport
      .reply(r#"{"is_liked": true, "likes_count": 2}"#);

    harness
      .block_on(harness.client.like("7", &button))
      .unwrap();

    assert_eq!(count.text(), "2");
    assert_eq!(other.text(), "99");
  }

  #[test]
  fn rejected_leaves_dom_untouched() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, icon, count) = post(&harness, "41");
    let before = (button.snapshot(), icon.snapshot(), count.snapshot());

    harness.transport.reply(r#"{"error": "not authenticated"}"#);

    assert_matches!(
      harness.block_on(harness.client.like("7", &button)),
      Err(Error::Rejected { message, .. }) if message == "not authenticated",
    );

    assert_eq!((button.snapshot(), icon.snapshot(), count.snapshot()), before);
  }

  #[test]
  fn malformed_leaves_dom_untouched() {
    let harness = Harness::new("csrftoken=XYZ");
    let (button, icon, count) = post(&harness, "41");
    let before = (button.snapshot(), icon.snapshot(), count.snapshot());

    harness.transport.reply("<h1>Forbidden</h1>");

    assert_matches!(
      harness.block_on(harness.client.like("7", &button)),
      Err(Error::Deserialize { .. }),
    );

    assert_eq!((button.snapshot(), icon.snapshot(), count.snapshot()), before);
  }
}
