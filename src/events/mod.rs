pub mod keyboard;
pub mod nav;
pub mod pointer;

pub use keyboard::*;
pub use nav::*;
pub use pointer::*;
