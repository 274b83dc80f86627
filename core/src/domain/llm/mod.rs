pub mod payload;
pub mod ports;
pub mod value_objects;

pub use payload::decode_payload;
pub use ports::*;
pub use value_objects::*;
