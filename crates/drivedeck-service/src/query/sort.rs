//! Stable comparator for item listings.

use std::cmp::Ordering;

use drivedeck_core::types::{SortDirection, SortKey, SortSpec};
use drivedeck_entity::StorageItem;

/// Compare two items under a sort specification.
///
/// String keys compare case-insensitively; the size key compares the
/// numeric component of the size label; timestamp keys compare
/// chronologically. Missing values sort last regardless of direction,
/// so the direction flip is applied only when both values are present.
pub fn compare_items<T: StorageItem>(a: &T, b: &T, spec: &SortSpec) -> Ordering {
    match spec.key {
        SortKey::Name => directed(cmp_str(a.name(), b.name()), spec.direction),
        SortKey::Owner => directed(cmp_str(a.owner_name(), b.owner_name()), spec.direction),
        SortKey::Size => directed(a.size_value().total_cmp(&b.size_value()), spec.direction),
        SortKey::SharedWith => directed(a.shared_with().cmp(&b.shared_with()), spec.direction),
        SortKey::FileType => cmp_nullable(
            a.file_type().map(str::to_lowercase),
            b.file_type().map(str::to_lowercase),
            spec.direction,
        ),
        SortKey::LastModified => cmp_nullable(a.modified_at(), b.modified_at(), spec.direction),
        SortKey::LastOpened => cmp_nullable(a.opened_at(), b.opened_at(), spec.direction),
        SortKey::DateAdded => cmp_nullable(a.added_at(), b.added_at(), spec.direction),
    }
}

/// Sort a listing in place with a stable sort.
pub fn sort_items<T: StorageItem>(items: &mut [T], spec: &SortSpec) {
    items.sort_by(|a, b| compare_items(a, b, spec));
}

fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

fn cmp_nullable<V: Ord>(a: Option<V>, b: Option<V>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(av), Some(bv)) => directed(av.cmp(&bv), direction),
    }
}
