pub mod clock;
pub mod lazy;
pub mod ready;
