pub mod macros;
pub mod pressure;
pub mod tide;

pub mod util;
