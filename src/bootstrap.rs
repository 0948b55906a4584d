use super::*;

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  /// Attaches every binding in `registry` to the matching elements, schedules
  /// notification dismissal, and starts chat polling. Returns the number of
  /// elements wired per class.
  pub fn bootstrap(self: &Rc<Self>, registry: &Registry) -> BTreeMap<&'static str, usize> {
    let mut wired = BTreeMap::new();

    for binding in registry.bindings() {
      let elements = self.document.elements(binding.class);

      for element in &elements {
        let client = self.clone();
        let action = binding.action;
        let target = element.clone();
        element.add_listener(
          binding.event,
          Box::new(move |event: &dyn Event| {
            event.prevent_default();
            client.dispatch(action, &target);
          }),
        );
      }

      *wired.entry(binding.class).or_default() += elements.len();
    }

    log::debug!("wired {wired:?}");

    let notifications = self.dismiss_notifications();
    let chats = self.poll_chats();

    log::debug!("dismissing {notifications} notifications, polling {chats} chats");

    wired
  }

  /// Runs `action` for `element` unless a request for it is already in
  /// flight. Failures are logged.
  pub fn dispatch(self: &Rc<Self>, action: Action, element: &D::Element) {
    let Some(busy) = Busy::acquire(element) else {
      log::debug!("{action} control busy, ignoring");
      return;
    };

    let client = self.clone();
    let element = element.clone();

    self.scheduler.spawn(Box::pin(async move {
      let result = client.run(action, &element).await;
      drop(busy);
      if let Err(err) = result {
        err.log();
      }
    }));
  }

  async fn run(&self, action: Action, element: &D::Element) -> Result {
    let key = element
      .attribute(action.attribute())
      .context(error::AttributeMissing {
        action,
        attribute: action.attribute(),
      })?;

    match action {
      Action::Follow => {
        self.follow(&key, element).await?;
      }
      Action::Like => {
        self.like(&key, element).await?;
      }
      Action::SendMessage => {
        self.send_message(&key, element).await?;
      }
    }

    Ok(())
  }
}
