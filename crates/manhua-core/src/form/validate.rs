//! Shelf Form Validation
//!
//! Rules run in a fixed order over the whole batch; the first rule that
//! fails decides the single message shown to the user.

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{cap_description, name_key, ManhuaItem};
use super::state::{FormMode, FormRow};

/// User-facing validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfFormError {
    #[error("Adicione pelo menos um manhua.")]
    EmptyBatch,
    #[error("Preencha o nome e o total de capítulos de todos os itens.")]
    MissingRequired,
    #[error("O total de capítulos precisa ser um número inteiro maior que zero.")]
    InvalidTotal,
    #[error("O capítulo atual precisa ser um número inteiro maior ou igual a zero.")]
    InvalidCurrent,
    #[error("O nome \"{0}\" aparece mais de uma vez neste lote.")]
    DuplicateInBatch(String),
    #[error("Já existe um manhua chamado \"{0}\" na sua estante.")]
    NameTaken(String),
}

/// A row that passed validation, with typed values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    /// Original item id (edit mode only)
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub total: u32,
    /// `None` when the current-chapter input was left blank
    pub current: Option<u32>,
}

pub fn validate_rows(
    mode: FormMode,
    rows: &[FormRow],
    existing: &[ManhuaItem],
    description_limit: usize,
) -> Result<Vec<ParsedRow>, ShelfFormError> {
    // 1. batch size
    if rows.is_empty() {
        return Err(ShelfFormError::EmptyBatch);
    }

    // 2. required fields
    if rows.iter().any(|row| row.name.trim().is_empty() || row.total_chapters.trim().is_empty()) {
        return Err(ShelfFormError::MissingRequired);
    }

    // 3. totals
    let totals = rows
        .iter()
        .map(|row| parse_whole(&row.total_chapters).filter(|v| *v > 0))
        .collect::<Option<Vec<u32>>>()
        .ok_or(ShelfFormError::InvalidTotal)?;

    // 4. explicit current chapters
    let mut currents = Vec::with_capacity(rows.len());
    for row in rows {
        let raw = row.current_chapter.trim();
        if raw.is_empty() {
            currents.push(None);
        } else {
            currents.push(Some(parse_whole(raw).ok_or(ShelfFormError::InvalidCurrent)?));
        }
    }

    // 5. duplicates inside the batch
    let mut seen = HashSet::new();
    for row in rows {
        if !seen.insert(name_key(&row.name)) {
            return Err(ShelfFormError::DuplicateInBatch(row.name.trim().to_string()));
        }
    }

    // 6. collisions with the shelf, ignoring the row's own item when editing
    for row in rows {
        let key = name_key(&row.name);
        let taken = existing.iter().any(|item| {
            let own = mode == FormMode::Edit && row.id.as_deref() == Some(item.id.as_str());
            !own && item.name_key() == key
        });
        if taken {
            return Err(ShelfFormError::NameTaken(row.name.trim().to_string()));
        }
    }

    Ok(rows
        .iter()
        .zip(totals)
        .zip(currents)
        .map(|((row, total), current)| ParsedRow {
            id: row.id.clone(),
            name: row.name.trim().to_string(),
            description: cap_description(row.description.trim(), description_limit),
            total,
            current,
        })
        .collect())
}

/// Plain decimal digits (an all-zero fraction like `10.0` is allowed),
/// non-negative and within u32. Exponent forms such as `1e3` are rejected.
fn parse_whole(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if !raw.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}
