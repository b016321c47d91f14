mod product_code;

pub use self::product_code::generate_product_code;
