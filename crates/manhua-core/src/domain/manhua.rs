//! Manhua Entity
//!
//! A tracked title on the user's shelf with manual chapter progress.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Status for items whose progress is maintained by hand
pub const STATUS_MANUAL: &str = "Manual";
/// Status for items synthesized from the import seed set
pub const STATUS_IMPORTED: &str = "Importado";

/// Maximum description length, in characters
pub const DESCRIPTION_LIMIT: usize = 220;

/// A tracked manhua
///
/// Serialized with camelCase keys, which is the persisted local storage format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManhuaItem {
    /// Unique identifier, never reassigned
    pub id: String,
    /// Display title
    pub name: String,
    /// Free text, may be empty
    #[serde(default)]
    pub description: String,
    /// Declared length of the work (always > 0)
    pub total_chapters: u32,
    /// Manual progress marker, within [0, total_chapters]
    pub current_chapter: u32,
    /// Provenance label ("Manual", "Importado", ...)
    pub status: String,
    #[serde(default)]
    pub favorite: bool,
}

impl ManhuaItem {
    /// Create a manual item, clamping progress to the total
    pub fn new(id: impl Into<String>, name: impl Into<String>, total_chapters: u32, current_chapter: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            total_chapters,
            current_chapter: current_chapter.min(total_chapters),
            status: STATUS_MANUAL.to_string(),
            favorite: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = cap_description(&description.into(), DESCRIPTION_LIMIT);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// Key used for duplicate detection
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    /// Set a new total and pull the current chapter back under it
    pub fn set_total(&mut self, total: u32) {
        self.total_chapters = total;
        self.current_chapter = self.current_chapter.min(total);
    }
}

impl Entity for ManhuaItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Trimmed, lowercased form of a name
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Truncate to at most `limit` characters (not bytes)
pub fn cap_description(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_current() {
        let item = ManhuaItem::new("a", "Lotus Noir", 10, 50);
        assert_eq!(item.current_chapter, 10);
        assert_eq!(item.status, STATUS_MANUAL);
        assert!(!item.favorite);
    }

    #[test]
    fn test_set_total_clamps() {
        let mut item = ManhuaItem::new("a", "Lotus Noir", 80, 52);
        item.set_total(40);
        assert_eq!(item.total_chapters, 40);
        assert_eq!(item.current_chapter, 40);
    }

    #[test]
    fn test_name_key_ignores_case_and_spaces() {
        assert_eq!(name_key("  Moonlit Contract "), name_key("moonlit contract"));
    }

    #[test]
    fn test_cap_description_counts_chars() {
        let text = "ç".repeat(230);
        let capped = cap_description(&text, DESCRIPTION_LIMIT);
        assert_eq!(capped.chars().count(), 220);
        assert_eq!(cap_description("curto", DESCRIPTION_LIMIT), "curto");
    }

    #[test]
    fn test_camel_case_format() {
        let item = ManhuaItem::new("x1", "Azure Blade", 40, 17).with_favorite(true);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["totalChapters"], 40);
        assert_eq!(json["currentChapter"], 17);
        assert_eq!(json["favorite"], true);
    }
}
