use super::*;

impl<D: Document, T: Transport, S: Scheduler> Client<D, T, S> {
  /// Fades out every notification currently in the document and removes it
  /// shortly after. Notifications added later are left alone.
  pub fn dismiss_notifications(self: &Rc<Self>) -> usize {
    let notifications = self.document.elements(class::ALERT);

    for notification in &notifications {
      let client = self.clone();
      let notification = notification.clone();
      self.scheduler.delay(
        self.config.dismiss_after(),
        Box::new(move || {
          notification.set_style("opacity", "0");
          client.scheduler.delay(
            client.config.remove_after(),
            Box::new(move || notification.remove()),
          );
        }),
      );
    }

    notifications.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fade_then_remove() {
    let harness = Harness::new("");
    let alert = harness.document.add("div", &[("class", "alert alert-success")]);
    let other = harness.document.add("div", &[("class", "card")]);

    assert_eq!(harness.client.dismiss_notifications(), 1);

    harness.scheduler.advance(Duration::from_millis(4999));
    assert_eq!(alert.style("opacity"), None);

    harness.scheduler.advance(Duration::from_millis(1));
    assert_eq!(alert.style("opacity").as_deref(), Some("0"));
    assert!(alert.is_attached());

    harness.scheduler.advance(Duration::from_millis(299));
    assert!(alert.is_attached());

    harness.scheduler.advance(Duration::from_millis(1));
    assert!(!alert.is_attached());
    assert!(other.is_attached());
  }

  #[test]
  fn every_notification() {
    let harness = Harness::new("");
    let alerts = (0..3)
      .map(|_| harness.document.add("div", &[("class", "alert")]))
      .collect::<Vec<FakeElement>>();

    assert_eq!(harness.client.dismiss_notifications(), 3);

    harness.scheduler.advance(Duration::from_millis(5300));

    assert!(alerts.iter().all(|alert| !alert.is_attached()));
  }

  #[test]
  fn later_notifications_are_not_covered() {
    let harness = Harness::new("");
    harness.client.dismiss_notifications();

    let late = harness.document.add("div", &[("class", "alert")]);

    harness.scheduler.advance(Duration::from_secs(10));

    assert!(late.is_attached());
    assert_eq!(late.style("opacity"), None);
  }

  #[test]
  fn configured_delays() {
    let harness = Harness::with_config(
      "",
      Config {
        dismiss_after_ms: 100,
        remove_after_ms: 10,
        ..Config::default()
      },
    );
    let alert = harness.document.add("div", &[("class", "alert")]);

    harness.client.dismiss_notifications();

    harness.scheduler.advance(Duration::from_millis(100));
    assert_eq!(alert.style("opacity").as_deref(), Some("0"));

    harness.scheduler.advance(Duration::from_millis(10));
    assert!(!alert.is_attached());
  }
}
