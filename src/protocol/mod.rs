pub mod constant;
pub mod payload;
pub mod util;
