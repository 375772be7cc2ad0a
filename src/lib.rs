pub mod audio;
pub mod compute;
pub mod constants;
pub mod difficulty;
pub mod entities;
pub mod input;
pub mod sprites;
