use super::*;

/// Everything a handler needs: the page, the network, the event loop and the
/// settings. Shared between listeners behind an `Rc`.
pub struct Client<D: Document, T: Transport, S: Scheduler> {
  pub(crate) config: Config,
  pub(crate) document: D,
  pub(crate) scheduler: S,
  transport: T,
}

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  pub fn new(config: Config, document: D, transport: T, scheduler: S) -> Rc<Self> {
    Rc::new(Self {
      config,
      document,
      scheduler,
      transport,
    })
  }

  fn csrf_token(&self) -> Option<String> {
    cookie(&self.document.cookie(), &self.config.csrf_cookie)
  }

  pub(crate) async fn get<R: DeserializeOwned>(&self, path: String) -> Result<R> {
    self
      .send(Request {
        body: None,
        headers: Vec::new(),
        method: Method::Get,
        path,
      })
      .await
  }

  pub(crate) async fn post<R: DeserializeOwned>(
    &self,
    path: String,
    content_type: &str,
    body: Option<String>,
  ) -> Result<R> {
    let mut headers = vec![("Content-Type".to_owned(), content_type.to_owned())];

    match self.csrf_token() {
      Some(token) => headers.push((self.config.csrf_header.clone(), token)),
      None => log::warn!(
        "no `{}` cookie, sending {path} without a CSRF token",
        self.config.csrf_cookie
      ),
    }

    self
      .send(Request {
        body,
        headers,
        method: Method::Post,
        path,
      })
      .await
  }

  async fn send<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
    let path = request.path.clone();

    log::trace!("{:?} {path}", request.method);

    let body = self
      .transport
      .send(request)
      .await
      .map_err(|source| Error::Transport {
        path: path.clone(),
        source: Box::new(source),
      })?;

    parse(&path, &body)
  }
}

/// Marks a control as having a request in flight for as long as it lives.
pub(crate) struct Busy<E: Element>(E);

impl<E: Element> Busy<E> {
  pub(crate) fn acquire(element: &E) -> Option<Self> {
    if element.attribute(attribute::BUSY).as_deref() == Some("true") {
      return None;
    }

    element.set_attribute(attribute::BUSY, "true");

    Some(Self(element.clone()))
  }
}

impl<E: Element> Drop for Busy<E> {
  fn drop(&mut self) {
    self.0.remove_attribute(attribute::BUSY);
  }
}

pub(crate) fn segment(value: &str) -> String {
  urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn busy_guard() {
    let document = FakeDocument::new();
    let button = document.add("a", &[("class", "like-btn")]);

    let busy = Busy::acquire(&button).unwrap();
    assert_eq!(button.attribute("aria-busy").as_deref(), Some("true"));
    assert!(Busy::acquire(&button).is_none());

    drop(busy);
    assert_eq!(button.attribute("aria-busy"), None);
    assert!(Busy::acquire(&button).is_some());
  }

  #[test]
  fn segments_are_encoded() {
    assert_eq!(segment("alice"), "alice");
    assert_eq!(segment("a b/c"), "a%20b%2Fc");
  }

  #[test]
  fn post_carries_csrf_token() {
    let harness = Harness::new("sessionid=s; csrftoken=XYZ");
    harness.transport.reply(r#"{"is_following": true}"#);

    harness
      .block_on(
        harness
          .client
          .post::<Follow>("/follow/bob/".into(), "application/json", None),
      )
      .unwrap();

    let request = harness.transport.single();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.header("x-csrftoken"), Some("XYZ"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body, None);
  }

  #[test]
  fn post_without_cookie_omits_token() {
    let harness = Harness::new("");
    harness.transport.reply(r#"{"is_following": false}"#);

    harness
      .block_on(
        harness
          .client
          .post::<Follow>("/follow/bob/".into(), "application/json", None),
      )
      .unwrap();

    assert_eq!(harness.transport.single().header("X-CSRFToken"), None);
  }

  #[test]
  fn transport_failure() {
    let harness = Harness::new("csrftoken=XYZ");
    harness.transport.fail("connection refused");

    assert_matches!(
      harness.block_on(harness.client.get::<Follow>("/follow/bob/".into())),
      Err(Error::Transport { path, .. }) if path == "/follow/bob/",
    );
  }
}
