pub mod camera;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod focus;
pub mod motion;
pub mod pick;
pub mod registry;
pub mod rig;
pub mod scene;
pub mod subject;

pub use camera::*;
pub use constants::*;
pub use error::SceneError;
pub use focus::{FocusEvent, FocusState};
pub use registry::*;
pub use rig::*;
pub use scene::*;
pub use subject::*;
