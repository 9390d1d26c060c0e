pub mod crop;
pub mod record;

pub use crop::*;
pub use record::*;
