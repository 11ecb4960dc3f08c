/// Country reference table shipped with the crate. The shape of every row
/// is checked by the build script; the content is checked when the table is
/// built.
pub const COUNTRY_TABLE_TSV: &str = include_str!("../../resources/countries.tsv");

pub const FIELD_SEPARATOR: char = '\t';
pub const COMMENT_PREFIX: char = '#';
// iso, name, dial code, flag, priority, international pattern, first local
// pattern. Any further fields are extra local patterns.
pub const MIN_FIELDS_PER_LINE: usize = 7;
pub const MAX_LINE_LENGTH: usize = 2 * 1024;

pub const PLUS_SIGN: &'static str = "+";
pub const ISO_CODE_LENGTH: usize = 2;
pub const DEFAULT_PRIORITY: i32 = 0;

// Characters that local cleaning removes on top of whitespace: ASCII and
// Unicode dashes, ASCII and full-width parentheses.
pub const LOCAL_SEPARATORS: &'static str = "-()\
\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2015}\u{2212}\
\u{FF08}\u{FF09}\u{FF0D}";
