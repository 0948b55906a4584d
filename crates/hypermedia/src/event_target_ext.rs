use super::*;

pub trait EventTargetExt {
  fn add_event_listener<E, F, R>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn add_event_listener<E, F, R>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    E: FromWasmAbi + 'static,
    F: FnMut(E) -> R + 'static,
    R: IntoWasmAbi + 'static,
  {
    let closure = Closure::<dyn FnMut(E) -> R>::new(callback);
    self
      .add_event_listener_with_callback(
        event_type,
        closure.as_ref().unchecked_ref::<js_sys::Function>(),
      )
      .map_err(Error::js("adding event listener"))?;
    closure.forget();
    Ok(())
  }
}
