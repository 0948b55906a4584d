use {super::*, agora::Element as _};

const CONFIG_ID: &str = "agora-config";

/// The live document.
#[derive(Clone)]
pub struct Page(web_sys::Document);

impl Page {
  pub fn current() -> Result<Self, Error> {
    window()?
      .document()
      .map(Self)
      .context(error::DocumentMissing)
  }

  pub fn is_loading(&self) -> bool {
    self.0.ready_state() == "loading"
  }

  /// Runs `callback` once the document has been parsed.
  pub fn on_ready(&self, callback: impl FnOnce() + 'static) -> Result<(), Error> {
    let mut callback = Some(callback);
    self
      .0
      .add_event_listener("DOMContentLoaded", move |_: web_sys::Event| {
        if let Some(callback) = callback.take() {
          callback();
        }
      })
  }

  /// Settings from the `#agora-config` JSON script element, if the page has
  /// one.
  pub fn config(&self) -> Result<agora::Config, Error> {
    let Some(element) = self.0.get_element_by_id(CONFIG_ID) else {
      return Ok(agora::Config::default());
    };

    let json = element.text_content().unwrap_or_default();

    agora::Config::from_json(&json).context(error::Config { id: CONFIG_ID })
  }
}

impl agora::Document for Page {
  type Element = Node;

  fn elements(&self, class: &str) -> Vec<Node> {
    self
      .0
      .select_all::<web_sys::Element>(&format!(".{class}"))
      .into_iter()
      .map(Node)
      .collect()
  }

  fn create_element(&self, tag: &str) -> Node {
    Node(self.0.create_element(tag).expect("invalid tag name"))
  }

  fn cookie(&self) -> String {
    self
      .0
      .dyn_ref::<HtmlDocument>()
      .and_then(|document| document.cookie().ok())
      .unwrap_or_default()
  }
}

#[derive(Clone, Debug)]
pub struct Node(pub web_sys::Element);

struct DomEvent(web_sys::Event);

impl agora::Event for DomEvent {
  fn prevent_default(&self) {
    self.0.prevent_default();
  }
}

impl agora::Element for Node {
  fn tag(&self) -> String {
    self.0.tag_name().to_lowercase()
  }

  fn attribute(&self, name: &str) -> Option<String> {
    self.0.get_attribute(name)
  }

  fn set_attribute(&self, name: &str, value: &str) {
    check("setting attribute", self.0.set_attribute(name, value));
  }

  fn remove_attribute(&self, name: &str) {
    check("removing attribute", self.0.remove_attribute(name));
  }

  fn has_class(&self, class: &str) -> bool {
    self.0.class_list().contains(class)
  }

  fn add_class(&self, class: &str) {
    check("adding class", self.0.class_list().add_1(class));
  }

  fn remove_class(&self, class: &str) {
    check("removing class", self.0.class_list().remove_1(class));
  }

  fn set_text(&self, text: &str) {
    self.0.set_text_content(Some(text));
  }

  fn set_style(&self, property: &str, value: &str) {
    match self.0.dyn_ref::<HtmlElement>() {
      Some(element) => check(
        "setting style",
        element.style().set_property(property, value),
      ),
      None => log::warn!("cannot style <{}>", self.tag()),
    }
  }

  fn append(&self, child: &Self) {
    check("appending child", self.0.append_child(&child.0));
  }

  fn remove(&self) {
    self.0.remove();
  }

  fn value(&self) -> String {
    if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
      input.value()
    } else if let Some(textarea) = self.0.dyn_ref::<HtmlTextAreaElement>() {
      textarea.value()
    } else {
      String::new()
    }
  }

  fn set_value(&self, value: &str) {
    if let Some(input) = self.0.dyn_ref::<HtmlInputElement>() {
      input.set_value(value);
    } else if let Some(textarea) = self.0.dyn_ref::<HtmlTextAreaElement>() {
      textarea.set_value(value);
    }
  }

  fn scroll_to_bottom(&self) {
    self.0.set_scroll_top(self.0.scroll_height());
  }

  fn descendants(&self) -> Vec<Self> {
    self
      .0
      .select_all::<web_sys::Element>("*")
      .into_iter()
      .map(Self)
      .collect()
  }

  fn add_listener(&self, kind: EventKind, mut listener: Box<dyn FnMut(&dyn agora::Event)>) {
    let result = self
      .0
      .add_event_listener(kind.name(), move |event: web_sys::Event| {
        listener(&DomEvent(event));
      });

    if let Err(err) = result {
      log::warn!("{err}");
    }
  }
}
