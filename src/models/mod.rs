pub mod campaign;
pub mod chat;
pub mod style;

pub use campaign::*;
pub use chat::*;
pub use style::*;
