mod byte_order;

pub use byte_order::*;
