use chrono::{DateTime, Utc};

use crate::model::Item;
use crate::mute::MuteSet;

/// Ascending sort key for one widget section. Items missing the key sort
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Created,
    Label,
    Date,
}

/// Sort then filter one fetched listing. The sort is stable, so items that
/// compare equal keep their server order, and filtering afterwards cannot
/// reorder survivors.
pub fn select<F>(
    mut items: Vec<Item>,
    accepts: F,
    sort_key: SortKey,
    now: DateTime<Utc>,
    expired_allowed: bool,
    muted: &MuteSet,
) -> Vec<Item>
where
    F: Fn(&Item) -> bool,
{
    items.sort_by(|a, b| match sort_key {
        SortKey::Created => a.created.cmp(&b.created),
        SortKey::Label => a.label.cmp(&b.label),
        SortKey::Date => a.date.cmp(&b.date),
    });
    items.retain(|item| {
        accepts(item)
            && !item.hidden()
            && !muted.is_muted(&item.id_key())
            && (expired_allowed || item.created.is_none_or(|c| c >= now))
    });
    items
}
