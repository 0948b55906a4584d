use super::*;

/// The page the interaction layer reads from and writes to.
pub trait Document: Clone + 'static {
  type Element: Element;

  fn elements(&self, class: &str) -> Vec<Self::Element>;

  fn create_element(&self, tag: &str) -> Self::Element;

  fn cookie(&self) -> String;

  /// The first element carrying `class` whose `attribute` equals `value`.
  fn element_with(&self, class: &str, attribute: &str, value: &str) -> Option<Self::Element> {
    self
      .elements(class)
      .into_iter()
      .find(|element| element.attribute(attribute).as_deref() == Some(value))
  }
}

pub trait Element: Clone + 'static {
  fn tag(&self) -> String;

  fn attribute(&self, name: &str) -> Option<String>;

  fn set_attribute(&self, name: &str, value: &str);

  fn remove_attribute(&self, name: &str);

  fn has_class(&self, class: &str) -> bool;

  fn add_class(&self, class: &str);

  fn remove_class(&self, class: &str);

  fn set_text(&self, text: &str);

  fn set_style(&self, property: &str, value: &str);

  fn append(&self, child: &Self);

  fn remove(&self);

  /// Current value of a form control, empty for anything else.
  fn value(&self) -> String;

  fn set_value(&self, value: &str);

  fn scroll_to_bottom(&self);

  /// All descendants in document order, not including `self`.
  fn descendants(&self) -> Vec<Self>;

  fn add_listener(&self, kind: EventKind, listener: Box<dyn FnMut(&dyn Event)>);

  fn descendant(&self, tag: &str) -> Option<Self> {
    self
      .descendants()
      .into_iter()
      .find(|element| element.tag() == tag)
  }

  fn field(&self, name: &str) -> Option<Self> {
    self
      .descendants()
      .into_iter()
      .find(|element| element.attribute("name").as_deref() == Some(name))
  }

  fn descendants_with_class(&self, class: &str) -> Vec<Self> {
    self
      .descendants()
      .into_iter()
      .filter(|element| element.has_class(class))
      .collect()
  }
}

pub trait Event {
  fn prevent_default(&self);
}
