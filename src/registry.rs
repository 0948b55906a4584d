use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventKind {
  Click,
  Submit,
}

impl EventKind {
  pub fn name(self) -> &'static str {
    match self {
      Self::Click => "click",
      Self::Submit => "submit",
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
  Follow,
  Like,
  SendMessage,
}

impl Action {
  /// Data attribute carrying the action's key.
  pub fn attribute(self) -> &'static str {
    match self {
      Self::Follow | Self::SendMessage => attribute::USERNAME,
      Self::Like => attribute::POST_ID,
    }
  }
}

impl Display for Action {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Follow => write!(f, "follow"),
      Self::Like => write!(f, "like"),
      Self::SendMessage => write!(f, "send message"),
    }
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
  pub action: Action,
  pub class: &'static str,
  pub event: EventKind,
}

/// Maps element classes and event kinds to the action they trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry {
  bindings: Vec<Binding>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn bind(mut self, class: &'static str, event: EventKind, action: Action) -> Self {
    self.bindings.push(Binding {
      action,
      class,
      event,
    });
    self
  }

  pub fn bindings(&self) -> &[Binding] {
    &self.bindings
  }

  /// Bindings for the markup the site renders. Standalone and list follow
  /// buttons are separate entries.
  pub fn standard() -> Self {
    Self::new()
      .bind(class::LIKE, EventKind::Click, Action::Like)
      .bind(class::FOLLOW, EventKind::Click, Action::Follow)
      .bind(class::FOLLOW_LIST, EventKind::Click, Action::Follow)
      .bind(class::CHAT_FORM, EventKind::Submit, Action::SendMessage)
  }
}
