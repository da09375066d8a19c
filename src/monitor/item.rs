//! # Query Items
//!
//! The engine's whole input contract with the (external) query layer: a
//! sequence of items carrying a row key, an age expressed in days relative to
//! a reference instant (negative = past), and a non-negative count.

use serde::{Deserialize, Serialize};

/// One raw aggregation input produced by the external query layer.
pub trait QueryItem {
    /// Key of the report row this item belongs to.
    fn key(&self) -> &str;

    /// Signed age in days relative to the report's reference instant.
    ///
    /// Calendar days as queried, or already rewritten to working days when
    /// the report was requested in working-day mode.
    fn age_in_days(&self) -> i32;

    /// Aggregated task count carried by this item.
    fn value(&self) -> i64;
}

/// Plain query item for flat reports keyed by a single dimension
/// (workbasket key, classification key, task state, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskQueryItem {
    pub key: String,
    pub age_in_days: i32,
    pub count: i64,
}

impl TaskQueryItem {
    pub fn new(key: impl Into<String>, age_in_days: i32, count: i64) -> Self {
        Self {
            key: key.into(),
            age_in_days,
            count,
        }
    }
}

impl QueryItem for TaskQueryItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn age_in_days(&self) -> i32 {
        self.age_in_days
    }

    fn value(&self) -> i64 {
        self.count
    }
}

/// Query item carrying the full organisational hierarchy of its workbasket,
/// used by nested reports that fold org level 1 through 4 down to the
/// workbasket itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgLevelQueryItem {
    pub org_level_1: String,
    pub org_level_2: String,
    pub org_level_3: String,
    pub org_level_4: String,
    pub workbasket_key: String,
    pub age_in_days: i32,
    pub count: i64,
}

impl QueryItem for OrgLevelQueryItem {
    fn key(&self) -> &str {
        &self.org_level_1
    }

    fn age_in_days(&self) -> i32 {
        self.age_in_days
    }

    fn value(&self) -> i64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_query_item_accessors() {
        let item = TaskQueryItem::new("WB-1", -4, 7);
        assert_eq!(item.key(), "WB-1");
        assert_eq!(item.age_in_days(), -4);
        assert_eq!(item.value(), 7);
    }

    #[test]
    fn test_org_level_item_keys_on_first_level() {
        let item = OrgLevelQueryItem {
            org_level_1: "EU".into(),
            org_level_2: "DE".into(),
            org_level_3: "BW".into(),
            org_level_4: "KA".into(),
            workbasket_key: "WB-42".into(),
            age_in_days: 0,
            count: 1,
        };
        assert_eq!(item.key(), "EU");
    }
}
