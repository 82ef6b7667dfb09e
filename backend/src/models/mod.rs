pub mod planting;
pub mod season;

pub use planting::*;
pub use season::*;
