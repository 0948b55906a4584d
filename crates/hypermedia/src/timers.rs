use super::*;

/// The browser event loop: futures run on the microtask queue, delays use
/// `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timers;

// setTimeout takes a signed 32-bit delay and fires at once on overflow
fn timeout_millis(delay: Duration) -> u32 {
  delay.as_millis().min(i32::MAX as u128) as u32
}

impl agora::Scheduler for Timers {
  fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
    wasm_bindgen_futures::spawn_local(task);
  }

  fn delay(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
    gloo_timers::callback::Timeout::new(timeout_millis(delay), callback).forget();
  }
}
