pub mod anim;
pub mod assets;
pub mod constants;
pub mod director;
pub mod input;
pub mod state;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");

pub use anim::*;
pub use assets::*;
pub use constants::*;
pub use director::*;
pub use input::*;
pub use state::*;
