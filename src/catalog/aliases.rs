/// Built-in aliases, keyed by normalized token.
///
/// Values are either a canonical code or a slash group that is re-split.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("NLA", "LA"),
    ("SCA", "CA"),
    ("NCA", "CA"),
    ("INDY", "IN"),
    ("ORWA", "OR/WA"),
];
