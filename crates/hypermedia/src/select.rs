use super::*;

pub trait Select {
  fn query_all(&self, selector: &str) -> Result<NodeList, JsValue>;

  fn select_all<T: JsCast>(&self, selector: &str) -> Vec<T> {
    let list = self.query_all(selector).expect("invalid selector");
    let mut nodes = Vec::new();
    for i in 0..list.length() {
      if let Some(node) = list.item(i).and_then(|node| node.cast::<T>()) {
        nodes.push(node);
      }
    }
    nodes
  }
}

impl Select for web_sys::Document {
  fn query_all(&self, selector: &str) -> Result<NodeList, JsValue> {
    self.query_selector_all(selector)
  }
}

impl Select for web_sys::Element {
  fn query_all(&self, selector: &str) -> Result<NodeList, JsValue> {
    self.query_selector_all(selector)
  }
}
