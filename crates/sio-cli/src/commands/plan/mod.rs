pub mod generate;
pub mod normalize;
