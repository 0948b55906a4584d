//! Class and attribute names the server-rendered templates use.

pub mod class {
  pub const ALERT: &str = "alert";
  pub const CHAT_FORM: &str = "chat-form";
  pub const CHAT_MESSAGES: &str = "chat-messages";
  pub const FOLLOW: &str = "follow-btn";
  pub const FOLLOWERS_COUNT: &str = "followers-count";
  pub const FOLLOW_LIST: &str = "follow-btn-list";
  pub const LIKE: &str = "like-btn";
  pub const LIKED: &str = "liked";
  pub const LIKES_COUNT: &str = "likes-count";
  pub const MESSAGE: &str = "message";
  pub const MESSAGE_CONTENT: &str = "message-content";
  pub const MESSAGE_TIME: &str = "message-time";
  pub const OUTLINE: &str = "btn-outline";
  pub const PRIMARY: &str = "btn-primary";
  pub const RECEIVED: &str = "received";
  pub const SENT: &str = "sent";
}

pub mod attribute {
  pub const BUSY: &str = "aria-busy";
  pub const CONTENT: &str = "content";
  pub const LAST_MESSAGE_ID: &str = "data-last-message-id";
  pub const MESSAGE_ID: &str = "data-message-id";
  pub const POST_ID: &str = "data-post-id";
  pub const USERNAME: &str = "data-username";
}
