pub mod display;
pub mod generate;
pub mod load;
