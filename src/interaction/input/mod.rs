pub mod keys;

pub use keys::{parse_keycode, JumpBinding, JumpBindingPlugin};
