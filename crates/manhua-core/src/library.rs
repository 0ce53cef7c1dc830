//! Library View Model
//!
//! `Shelf` owns the collection and its repository. Every mutation goes
//! through a named intent and is written back before the intent returns.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Entity, IdSource, ManhuaItem};
use crate::form::{apply_edits, FormOutcome};
use crate::repository::{CollectionRepository, KeyValueStore, ManhuaRepository};
use crate::seed::import_list;
use crate::stats::{compute_stats, StatItem};

#[derive(Debug, Clone)]
pub struct Shelf<S> {
    items: Vec<ManhuaItem>,
    repo: ManhuaRepository<S>,
}

impl<S: KeyValueStore> Shelf<S> {
    /// Load the shelf from the repository, or `fallback` when nothing usable is stored
    pub fn open(mut repo: ManhuaRepository<S>, fallback: Vec<ManhuaItem>) -> Self {
        let items = repo.load(fallback);
        log::info!("[SHELF] Opened with {} items", items.len());
        Self { items, repo }
    }

    pub fn items(&self) -> &[ManhuaItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ManhuaItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn position(&self, id: &str) -> DomainResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("manhua {}", id)))
    }

    pub fn repository(&self) -> &ManhuaRepository<S> {
        &self.repo
    }

    pub fn display_order(&self) -> Vec<ManhuaItem> {
        display_order(&self.items)
    }

    /// Newest entries first (creations are prepended)
    pub fn recent(&self, limit: usize) -> Vec<ManhuaItem> {
        self.items.iter().take(limit).cloned().collect()
    }

    pub fn stats(&self) -> Vec<StatItem> {
        compute_stats(&self.items)
    }

    /// Apply a submitted form. Returns how many items were added or changed.
    ///
    /// On a storage error the in-memory shelf keeps the change.
    pub fn apply_form(&mut self, outcome: &FormOutcome) -> DomainResult<usize> {
        let changed = match outcome {
            FormOutcome::Created(created) => {
                self.check_fresh(created)?;
                let mut next = created.clone();
                next.append(&mut self.items);
                self.items = next;
                created.len()
            }
            FormOutcome::Edited(rows) => apply_edits(&mut self.items, rows),
        };
        log::info!("[SHELF] Form applied, {} items changed", changed);
        self.persist()?;
        Ok(changed)
    }

    /// Flip the favorite flag. Returns the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> DomainResult<bool> {
        let index = self.position(id)?;
        let item = &mut self.items[index];
        item.favorite = !item.favorite;
        let favorite = item.favorite;
        self.persist()?;
        Ok(favorite)
    }

    /// Remove by id and return the removed item
    pub fn delete(&mut self, id: &str) -> DomainResult<ManhuaItem> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        log::info!("[SHELF] Deleted {}", removed.name);
        self.persist()?;
        Ok(removed)
    }

    /// Append the import list, skipping names already on the shelf.
    /// Returns how many were added; nothing is written when none were.
    pub fn import_seed(&mut self, ids: &mut impl IdSource) -> DomainResult<usize> {
        let mut taken: HashSet<String> = self.items.iter().map(ManhuaItem::name_key).collect();
        let fresh: Vec<ManhuaItem> = import_list(ids)
            .into_iter()
            .filter(|item| taken.insert(item.name_key()))
            .collect();

        let added = fresh.len();
        if added == 0 {
            return Ok(0);
        }
        self.items.extend(fresh);
        self.persist()?;
        Ok(added)
    }

    /// New items must not reuse an id or a name already on the shelf
    fn check_fresh(&self, created: &[ManhuaItem]) -> DomainResult<()> {
        let ids: HashSet<&String> = self.items.iter().map(Entity::id).collect();
        let names: HashSet<String> = self.items.iter().map(ManhuaItem::name_key).collect();
        match created.iter().find(|item| ids.contains(item.id()) || names.contains(&item.name_key())) {
            Some(clash) => Err(DomainError::Conflict(format!("manhua {} ({})", clash.name, clash.id))),
            None => Ok(()),
        }
    }

    fn persist(&mut self) -> DomainResult<()> {
        self.repo.save(&self.items).map_err(|e| {
            log::warn!("[SHELF] Could not persist shelf: {}", e);
            e
        })
    }
}

/// Favorites first, then by name ignoring case. Stable for equal keys.
pub fn display_order(items: &[ManhuaItem]) -> Vec<ManhuaItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| match (a.favorite, b.favorite) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });
    sorted
}
