mod abnormal;
mod empty;
mod many;
mod one;

pub use abnormal::Abnormal;
pub use empty::Empty;
pub use many::Many;
pub use one::One;
