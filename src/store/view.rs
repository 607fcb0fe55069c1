use chrono::{Duration, NaiveDate};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::Result;
use crate::model::ViewFilter;
use crate::query::Window;
use crate::store::kv::KvStore;

pub const VIEW_FILTER_KEY: &str = "view_filter";
pub const DARK_MODE_KEY: &str = "dark_mode";
pub const WEEK_START_KEY: &str = "week_start";

/// Persisted presentation settings. Each field lives under its own key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub week_start: NaiveDate,
    pub filter: ViewFilter,
    pub dark_mode: bool,
}

fn read_or_default<T: DeserializeOwned>(kv: &impl KvStore, key: &str) -> Option<T> {
    let raw = match kv.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(key, error = %e, "could not read setting, using default");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "malformed setting, using default");
            None
        }
    }
}

fn write<T: Serialize>(kv: &mut impl KvStore, key: &str, value: &T) -> Result<()> {
    kv.set(key, &serde_json::to_string(value)?)
}

/// A stored week pointer must leave room to snap back to its Sunday and to
/// span the whole window.
fn usable_week(date: NaiveDate) -> bool {
    date.checked_sub_signed(Duration::days(6)).is_some() && Window::checked(date).is_some()
}

/// Load view settings. `fallback_week` is used when no usable week was stored.
pub fn load(kv: &impl KvStore, fallback_week: NaiveDate) -> ViewState {
    let week_start = match read_or_default::<NaiveDate>(kv, WEEK_START_KEY) {
        Some(date) if usable_week(date) => date,
        Some(date) => {
            warn!(%date, "stored week is out of range, using the current week");
            fallback_week
        }
        None => fallback_week,
    };
    ViewState {
        week_start,
        filter: read_or_default(kv, VIEW_FILTER_KEY).unwrap_or_default(),
        dark_mode: read_or_default(kv, DARK_MODE_KEY).unwrap_or(false),
    }
}

pub fn save_filter(kv: &mut impl KvStore, filter: ViewFilter) -> Result<()> {
    write(kv, VIEW_FILTER_KEY, &filter)
}

pub fn save_dark_mode(kv: &mut impl KvStore, dark_mode: bool) -> Result<()> {
    write(kv, DARK_MODE_KEY, &dark_mode)
}

pub fn save_week_start(kv: &mut impl KvStore, week_start: NaiveDate) -> Result<()> {
    write(kv, WEEK_START_KEY, &week_start)
}
