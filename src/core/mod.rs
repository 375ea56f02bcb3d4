pub mod cart;
pub mod pricing;
pub mod skip;

pub use cart::{Cart, CartEntry};
pub use pricing::{PriceBreakdown, SURCHARGE_FLAT, Surcharge};
pub use skip::{Skip, SkipId};
