mod attendance;
mod common;
mod player;
mod schedule;
mod team;
mod user;

pub use attendance::*;
pub use common::*;
pub use player::*;
pub use schedule::*;
pub use team::*;
pub use user::*;
