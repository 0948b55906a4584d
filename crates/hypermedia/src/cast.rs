use super::*;

pub trait Cast {
  fn cast<T: JsCast>(self) -> Option<T>;
}

impl<V: JsCast> Cast for V {
  fn cast<T: JsCast>(self) -> Option<T> {
    self.dyn_into::<T>().ok()
  }
}
