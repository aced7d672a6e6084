mod gather;
mod handler;

pub use gather::gather;
pub use handler::FanOutHandler;
