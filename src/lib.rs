//! Speech-bubble chat transcript widget for egui.
//!
//! [`ScrollChat`] keeps an insertion-ordered display map of chat messages and
//! renders each one as a rounded, sender-colored bubble inside a vertical
//! scroll area. Messages from the owning user sit flush right, everyone else
//! flush left.

pub mod config;
pub mod error;
pub mod model;
pub mod ui;

pub use error::{ChatError, ChatResult};
pub use model::ChatItem;
pub use ui::scroll_chat::ScrollChat;
pub use ui::theme::Palette;
