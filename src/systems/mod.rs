pub mod dreaming;
pub mod driver;
pub mod waking;
