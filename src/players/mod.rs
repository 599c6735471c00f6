//! Players: the capability set every card-game participant supports.
//!
//! Games implement `Player` for their own participant type and supply the
//! turn action in `play`. Every hand operation comes for free from the
//! trait's provided methods.
//!
//! - `Player`: The trait
//! - `WarPlayer`: A participant in War

pub mod player;
pub mod war;

pub use player::Player;
pub use war::WarPlayer;
