#![allow(async_fn_in_trait)]

use {
  self::{
    client::{segment, Busy},
    markup::{attribute, class},
    payload::parse,
  },
  futures::future::LocalBoxFuture,
  serde::{de::DeserializeOwned, Deserialize},
  snafu::{ErrorCompat, OptionExt, ResultExt, Snafu},
  std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    rc::Rc,
    time::Duration,
  },
};

pub use self::{
  chat::{Message, Sent},
  client::Client,
  config::Config,
  cookie::cookie,
  document::{Document, Element, Event},
  error::Error,
  follow::Follow,
  like::Like,
  registry::{Action, Binding, EventKind, Registry},
  scheduler::Scheduler,
  transport::{Method, Request, Transport},
};


#[cfg(test)]
use test::*;

mod bootstrap;
mod chat;
mod client;
mod config;
mod cookie;
mod document;
mod error;
mod follow;
mod like;
pub mod markup;
mod notifications;
mod payload;
mod registry;
mod scheduler;
mod transport;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
