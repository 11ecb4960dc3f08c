use crate::CountryRecord;

use super::{get_table, get_validator, region_code::RegionCode};

#[test]
fn validate_international_numbers() {
    let table = get_table();
    let validator = get_validator(&table);

    assert!(validator.validate_international("+201012345678"));
    assert!(validator.validate_international("+20 101 234 5678"));
    assert!(!validator.validate_international("+20123"));
    assert!(!validator.validate_international("invalid"));
    assert!(!validator.validate_international(""));

    assert!(validator.validate_international("+12685551234"));
    assert!(validator.validate_international("+447700900123"));
    assert!(validator.validate_international("+44 20 7946 0958"));
    assert!(validator.validate_international("+79991234567"));
    assert!(validator.validate_international("+7 (701) 123-45-67"));
    assert!(validator.validate_international("+12125551234"));
    assert!(validator.validate_international("+1876 555 1234"));

    // Detected, but too short to be a full number.
    assert!(validator.detect_country("+1 212 555").is_some());
    assert!(!validator.validate_international("+1 212 555"));
    // Jamaican subscriber numbers never start with 1.
    assert!(!validator.validate_international("+18761234567"));
}

#[test]
fn validate_local_numbers() {
    let table = get_table();
    let validator = get_validator(&table);
    let country = |iso: &str| table.by_iso_code(iso).unwrap();

    // Either of the British patterns is enough.
    assert!(validator.validate_local("07700 900123", country(RegionCode::gb())));
    assert!(validator.validate_local("020 7946 0958", country(RegionCode::gb())));
    assert!(validator.validate_local("7700900123", country(RegionCode::gb())));
    assert!(!validator.validate_local("12345", country(RegionCode::gb())));
    assert!(!validator.validate_local("", country(RegionCode::gb())));

    assert!(validator.validate_local("010 1234 5678", country(RegionCode::eg())));
    assert!(validator.validate_local("02 12345678", country(RegionCode::eg())));

    assert!(validator.validate_local("(212) 555-1234", country(RegionCode::us())));
    assert!(!validator.validate_local("112 555 1234", country(RegionCode::us())));

    assert!(validator.validate_local("8 (999) 123-45-67", country(RegionCode::ru())));
    assert!(validator.validate_local("999 123 45 67", country(RegionCode::ru())));
    // Kazakh ranges are not Russian.
    assert!(!validator.validate_local("707 123 45 67", country(RegionCode::ru())));

    assert!(validator.validate_local("555-1234", country(RegionCode::ag())));
    assert!(validator.validate_local("268 555 1234", country(RegionCode::ag())));

    assert!(validator.validate_local("030 123456", country(RegionCode::de())));
    assert!(validator.validate_local("0151 23456789", country(RegionCode::de())));
}

#[test]
fn validate_for_selected_country() {
    let table = get_table();
    let validator = get_validator(&table);
    let gb = table.by_iso_code(RegionCode::gb());

    assert!(validator.validate("+44 7700 900123", gb));
    assert!(validator.validate("07700 900123", gb));
    // International input must carry the selected country's dial code.
    assert!(!validator.validate("+20 101 234 5678", gb));
    assert!(!validator.validate("12345", gb));

    assert!(validator.validate("+201012345678", None));
    assert!(!validator.validate("07700 900123", None));
    assert!(!validator.validate("", None));
}

#[test]
fn validate_with_custom_strategy() {
    let table = get_table();
    let validator = get_validator(&table);
    let only_egypt = |raw: &str, country: &CountryRecord| {
        country.iso_code() == RegionCode::eg() && !raw.is_empty()
    };

    assert!(validator.validate_with("+20 1", None, only_egypt));
    assert!(!validator.validate_with("+44 1", None, only_egypt));
    assert!(!validator.validate_with("nothing", None, only_egypt));
    // The selected country takes the place of detection.
    assert!(validator.validate_with("nothing", table.by_iso_code(RegionCode::eg()), only_egypt));
}

#[test]
fn format_international_numbers() {
    let table = get_table();
    let validator = get_validator(&table);

    assert_eq!(validator.format_international("+20 101 234 5678"), "+201012345678");
    assert_eq!(validator.format_international("+7 (999) 123-45-67"), "+79991234567");
    assert_eq!(validator.format_international("212 555 1234"), "+2125551234");
    assert_eq!(validator.format_international("hello"), "hello");
    assert_eq!(validator.format_international(""), "");

    let formatted = validator.format_international_with("+44 7700 900123", |digits, country| {
        format!("{} {}", country.dial_code(), &digits[country.dial_code_digits().len()..])
    });
    assert_eq!(formatted, "+44 7700900123");
    assert_eq!(validator.format_international_with("(-)", |_, _| String::from("x")), "(-)");
}

#[test]
fn format_with_dial_code() {
    let table = get_table();
    let validator = get_validator(&table);
    let gb = table.by_iso_code(RegionCode::gb()).unwrap();

    assert_eq!(validator.format_with_dial_code("07700 900123", gb), "+44 07700900123");
    assert_eq!(validator.format_with_dial_code(" (020) 7946-0958 ", gb), "+44 02079460958");
    assert_eq!(validator.format_with_dial_code("+44 7700 900123", gb), "+447700900123");
}

#[test]
fn crate_level_functions() {
    assert_eq!(
        crate::detect_country("+20 101 234 5678").map(|c| c.iso_code()),
        Some(RegionCode::eg())
    );
    assert!(crate::detect_country("nothing").is_none());
    assert_eq!(crate::detect_all_matches("+1 876 555 1234").len(), 3);

    assert!(crate::validate_international("+201012345678"));
    assert!(!crate::validate_international("+20123"));

    let gb = crate::get_country_by_code("gb").unwrap();
    assert_eq!(gb.dial_code(), "+44");
    assert!(crate::validate_local("07700 900123", gb));
    assert_eq!(crate::get_country_by_name("Egypt").map(|c| c.iso_code()), Some(RegionCode::eg()));
    assert_eq!(crate::get_countries_by_dial_code("+7").len(), 2);

    assert_eq!(crate::format_international("+7 999 123 45 67"), "+79991234567");
    assert_eq!(crate::all_countries().len(), crate::COUNTRY_TABLE.len());
}

#[test]
fn caller_records_leave_table_patterns_alone() {
    let table = get_table();
    let validator = get_validator(&table);
    let custom = CountryRecord::new("EG", "Custom", "+20", "F", "^20$", vec!["^x$".to_owned()]);

    assert!(validator.validate_local("x", &custom));
    assert!(validator.validate("x", Some(&custom)));
    assert_eq!(
        validator.detect_country("+201012345678").map(|c| c.iso_code()),
        Some(RegionCode::eg())
    );
    assert!(validator.validate_international("+201012345678"));
    assert!(!validator.validate_local("x", table.by_iso_code(RegionCode::eg()).unwrap()));

    // Same through the process-wide engine.
    assert!(crate::validate_local("x", &custom));
    assert_eq!(
        crate::detect_country("+201012345678").map(|c| c.iso_code()),
        Some(RegionCode::eg())
    );
    assert!(crate::validate_international("+201012345678"));
}
