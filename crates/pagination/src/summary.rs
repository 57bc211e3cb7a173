use serde::{Deserialize, Serialize};

/// Point-in-time view of a `Paginator` and everything derived from it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageSummary {
    pub base: i64,
    pub items_per_page: i64,
    pub item_count: Option<i64>,
    pub page: i64,
    pub first_page: i64,
    pub last_page: Option<i64>,
    pub page_count: Option<i64>,
    pub offset: i64,
    pub countdown_offset: Option<i64>,
    pub length: i64,
    pub first_item_on_page: i64,
    pub last_item_on_page: i64,
    pub is_first: bool,
    pub is_last: bool,
}
