mod validator_tests;

use crate::{CountryTable, PhoneValidator};

static ONCE: std::sync::Once = std::sync::Once::new();

// Each test binary gets one logger; tests build their own validator over the
// compiled-in table so they do not depend on the process-wide one.
fn get_validator(table: &CountryTable) -> PhoneValidator<'_> {
    ONCE.call_once(|| {
        // Another test may have installed a logger already.
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
    PhoneValidator::new(table)
}

fn get_table() -> CountryTable {
    CountryTable::load_embedded().expect("Embedded table should be valid")
}
