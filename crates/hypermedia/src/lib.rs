use {
  agora::{EventKind, Method, Request},
  futures::future::LocalBoxFuture,
  snafu::{OptionExt, ResultExt, Snafu},
  std::{ops::Deref, time::Duration},
  wasm_bindgen::{
    closure::Closure,
    convert::{FromWasmAbi, IntoWasmAbi},
    JsCast, JsError, JsValue,
  },
  web_sys::{
    EventTarget, HtmlDocument, HtmlElement, HtmlInputElement, HtmlTextAreaElement, NodeList,
  },
};

pub use {
  self::{
    api::Api,
    cast::Cast,
    error::Error,
    event_target_ext::EventTargetExt,
    page::{Node, Page},
    select::Select,
    timers::Timers,
  },
  agora, log, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

mod api;
mod cast;
mod error;
mod event_target_ext;
mod page;
mod select;
mod timers;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

pub fn window() -> Result<web_sys::Window, Error> {
  web_sys::window().context(error::WindowMissing)
}

/// Renders a thrown JavaScript value for a log line or error message.
fn describe(value: &JsValue) -> String {
  value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Logs a failed DOM call. DOM writes only fail on invalid names, which are
/// all constants here.
fn check<T>(operation: &str, result: Result<T, JsValue>) {
  if let Err(err) = result {
    log::warn!("{operation} failed: {}", describe(&err));
  }
}
