//! Item Fixtures

use serde::Deserialize;

/// Wrapper for items in YAML
#[derive(Debug, Deserialize)]
pub struct ItemsFixture {
    /// Product keys in the order they are rung up; repeats add another unit
    pub items: Vec<String>,
}
