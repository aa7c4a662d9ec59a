pub mod champions;

pub use champions::{CHAMPIONS, champion_index, find_champion};
