mod health;
mod hello;

pub use health::health;
pub use hello::hello;
