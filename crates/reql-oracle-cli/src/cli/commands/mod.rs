pub mod check;
pub mod compare;
mod dispatch;

pub use dispatch::dispatch;
