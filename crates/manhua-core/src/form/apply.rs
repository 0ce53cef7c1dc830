//! Applying Validated Rows
//!
//! Turns parsed rows into new items (create) or field updates (edit).

use crate::domain::{Entity, IdSource, ManhuaItem, STATUS_MANUAL};
use super::validate::ParsedRow;

/// Build new items for a create batch.
///
/// Progress defaults: an explicit value is clamped to the total; a blank
/// first row counts as fully read; later blank rows carry forward the highest
/// progress seen so far, clamped to their own total.
pub fn build_created(rows: &[ParsedRow], ids: &mut impl IdSource) -> Vec<ManhuaItem> {
    let mut carried = 0u32;
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let current = match row.current {
                Some(value) => value.min(row.total),
                None if index == 0 => row.total,
                None => carried.min(row.total),
            };
            carried = carried.max(current);

            ManhuaItem {
                id: ids.next_id(),
                name: row.name.clone(),
                description: row.description.clone(),
                total_chapters: row.total,
                current_chapter: current,
                status: STATUS_MANUAL.to_string(),
                favorite: false,
            }
        })
        .collect()
}

/// Apply edit rows onto matching items (by id). Returns how many items changed.
///
/// Rows whose id is not on the shelf are ignored; items without a row are untouched.
pub fn apply_edits(items: &mut [ManhuaItem], rows: &[ParsedRow]) -> usize {
    let mut updated = 0;
    for row in rows {
        let Some(id) = row.id.as_deref() else { continue };
        let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
            log::debug!("[FORM] Edit row for unknown id {} ignored", id);
            continue;
        };

        item.name = row.name.clone();
        item.description = row.description.clone();
        if let Some(current) = row.current {
            item.current_chapter = current;
        }
        item.set_total(row.total);
        updated += 1;
    }
    updated
}
