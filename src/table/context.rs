use crate::cards::hand::Rules;
use crate::odds::cache::Cache;
use crate::strategy::tables::Tables;

/// Everything a round needs that outlives it: strategy tables, rule
/// toggles, and the shared probability cache. Passed down explicitly;
/// no ambient globals.
#[derive(Debug)]
pub struct Context {
    pub tables: Tables,
    pub rules: Rules,
    pub cache: Cache,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            tables: Tables::basic(),
            rules: Rules::default(),
            cache: Cache::default(),
        }
    }
}
