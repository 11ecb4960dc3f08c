use crate::country::CountryRecord;

/// Internal country matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub trait MatcherApi: Send + Sync {
    /// Returns whether the given digit string (dial code included, only ASCII
    /// digits) matches the international pattern of `country`.
    fn match_international(&self, digits: &str, country: &CountryRecord) -> bool;

    /// Returns whether the given subscriber number matches any of the local
    /// patterns of `country`.
    fn match_local(&self, number: &str, country: &CountryRecord) -> bool;
}
