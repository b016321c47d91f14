mod product;
mod user;
mod variant;

pub use self::product::{Product, ProductTree, VariantTree};
pub use self::user::User;
pub use self::variant::{SubVariant, Variant};
