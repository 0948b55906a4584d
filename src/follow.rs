use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Follow {
  #[serde(default)]
  pub followers_count: Option<u64>,
  pub is_following: bool,
}

impl Follow {
  pub fn path(username: &str) -> String {
    format!("/follow/{}/", segment(username))
  }

  fn render<D: Document>(self, document: &D, username: &str, button: &D::Element) {
    let (label, stale, fresh) = if self.is_following {
      ("Unfollow", class::PRIMARY, class::OUTLINE)
    } else {
      ("Follow", class::OUTLINE, class::PRIMARY)
    };

    button.set_text(label);
    button.remove_class(stale);
    button.add_class(fresh);

    if let Some(count) = self.followers_count {
      if let Some(display) =
        document.element_with(class::FOLLOWERS_COUNT, attribute::USERNAME, username)
      {
        display.set_text(&count.to_string());
      }
    }
  }
}

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  /// Toggles whether the caller follows `username` and relabels `button` to
  /// match.
  pub async fn follow(&self, username: &str, button: &D::Element) -> Result<Follow> {
    let follow = self
      .post::<Follow>(Follow::path(username), "application/json", None)
      .await?;

    follow.render(&self.document, username, button);

    Ok(follow)
  }
}
