pub(crate) mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
mod record;
mod table;
mod detector;
mod validator;

use std::sync::LazyLock;

pub use detector::CountryDetector;
pub use enums::{Detection, DetectionMode};
pub use record::CountryRecord;
pub use table::CountryTable;
pub use validator::PhoneValidator;

/// Country table compiled into the crate, loaded on first access.
///
/// A table that fails its integrity checks would leave some country silently
/// undetectable, so loading it panics instead.
pub static COUNTRY_TABLE: LazyLock<CountryTable> = LazyLock::new(|| {
    match CountryTable::load_embedded() {
        Ok(table) => table,
        Err(err) => {
            let err_message = format!("Could not load compiled-in country table: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
});

pub static PHONE_VALIDATOR: LazyLock<PhoneValidator<'static>> = LazyLock::new(|| {
    PhoneValidator::new(&COUNTRY_TABLE)
});
