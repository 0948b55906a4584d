use super::*;

/// The page's event loop.
pub trait Scheduler: 'static {
  fn spawn(&self, task: LocalBoxFuture<'static, ()>);

  fn delay(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}
