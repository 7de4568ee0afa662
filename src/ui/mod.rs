pub mod app;
pub mod bubble;
pub mod chat_line;
pub mod scroll_chat;
pub mod theme;

pub use app::ChatApp;
pub use scroll_chat::ScrollChat;
