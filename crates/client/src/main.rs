use hypermedia::{
  agora::{Client, Config, Registry},
  log,
  wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
  wasm_bindgen_futures, Api, Error, Page, Timers,
};

fn start(page: Page) -> Result<(), Error> {
  let config = page.config().unwrap_or_else(|err| {
    log::error!("{err}, using defaults");
    Config::default()
  });

  let client = Client::new(config, page, Api::new()?, Timers);

  client.bootstrap(&Registry::standard());

  Ok(())
}

fn report(result: Result<(), Error>) {
  if let Err(err) = result {
    log::error!("failed to start: {err}");
  }
}

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  hypermedia::initialize_console(log::Level::Info)?;

  let page = Page::current()?;

  if page.is_loading() {
    let ready = page.clone();
    page.on_ready(move || report(start(ready)))?;
  } else {
    report(start(page));
  }

  Ok(())
}
