pub mod collision;
pub mod holding;
pub mod input;
pub mod movement;
pub mod scoring;

pub use collision::*;
pub use holding::*;
pub use input::*;
pub use movement::*;
pub use scoring::*;
