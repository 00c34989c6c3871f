pub mod config;
pub mod normalize;
pub mod reference;
pub mod resolver;
pub mod types;
