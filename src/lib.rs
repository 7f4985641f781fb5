pub mod cli;
pub mod config;
pub mod receiver;
pub mod sender;

pub use receiver::ChatReceiver;
pub use sender::ChatSender;
