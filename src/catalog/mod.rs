//! Region catalog
//!
//! Static reference data for label parsing:
//! - the fixed set of valid region codes (`regions`)
//! - the alias table mapping non-canonical tokens to codes or slash groups (`aliases`)
//!
//! The standard catalog is process-wide and initialized once on first use.
//! A catalog carrying configured aliases is built once at startup and then
//! only borrowed.

mod aliases;
pub mod regions;

pub use aliases::BUILTIN_ALIASES;
pub use regions::{is_valid_region, RegionCode, REGION_CODES};

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::warn;

/// Separator between regions in a normalized label
pub const SEPARATOR: char = '/';

static STANDARD_CATALOG: Lazy<RegionCatalog> = Lazy::new(RegionCatalog::builtin);

/// Normalize a raw territory token
///
/// Uppercases, strips periods and spaces, and turns `-` into the `/`
/// separator. No canonical code contains `-`, so codes pass through as-is.
pub fn normalize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != ' ')
        .map(|c| if c == '-' { SEPARATOR } else { c })
        .collect::<String>()
        .to_uppercase()
}

#[derive(Debug, Clone)]
pub struct RegionCatalog {
    aliases: HashMap<String, String>,
}

impl RegionCatalog {
    /// The shared catalog with built-in aliases only
    pub fn standard() -> &'static RegionCatalog {
        &STANDARD_CATALOG
    }

    fn builtin() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        Self { aliases }
    }

    /// Build a catalog with extra aliases layered over the built-ins
    ///
    /// Keys and values go through [`normalize_token`], so `"N. LA" = "LA"`
    /// and `"NLA" = "LA"` are the same entry.
    pub fn with_aliases<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut catalog = Self::builtin();
        for (from, to) in extra {
            let key = normalize_token(from.as_ref());
            let value = normalize_token(to.as_ref());

            if !value.split(SEPARATOR).any(is_valid_region) {
                warn!(
                    "Alias '{}' -> '{}' resolves to no valid region and will match nothing",
                    from.as_ref(),
                    to.as_ref()
                );
            }

            catalog.aliases.insert(key, value);
        }
        catalog
    }

    /// Validated code for `token`, if it is canonical
    pub fn region(&self, token: &str) -> Option<RegionCode> {
        RegionCode::new(token)
    }

    /// Exact-match alias lookup on an already-normalized token
    pub fn resolve_alias(&self, token: &str) -> Option<&str> {
        self.aliases.get(token).map(String::as_str)
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
