#![deny(unsafe_code)]

pub mod enums;
pub mod error;
pub mod ids;
pub mod inquiry;
pub mod product;

pub use enums::{ChainStyle, Finish, Metal};
pub use error::{ModelError, Result};
pub use ids::Sku;
pub use inquiry::{Inquiry, QuickQuote};
pub use product::{CARD_TAG_LIMIT, ProductRecord};
