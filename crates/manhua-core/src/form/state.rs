//! Shelf Form State Machine
//!
//! closed -> count selection -> editing -> closed.
//! Edit mode skips count selection and seeds rows from existing items.

use crate::config::ShelfConfig;
use crate::domain::{cap_description, IdSource, ManhuaItem};
use super::apply::build_created;
use super::validate::{validate_rows, ParsedRow, ShelfFormError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Raw user input for one title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRow {
    /// Set when the row edits an existing item
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub total_chapters: String,
    pub current_chapter: String,
}

impl FormRow {
    pub fn from_item(item: &ManhuaItem) -> Self {
        Self {
            id: Some(item.id.clone()),
            name: item.name.clone(),
            description: item.description.clone(),
            total_chapters: item.total_chapters.to_string(),
            current_chapter: item.current_chapter.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Name,
    Description,
    TotalChapters,
    CurrentChapter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStep {
    #[default]
    Closed,
    CountSelection { count_input: String },
    Editing { mode: FormMode, rows: Vec<FormRow> },
}

/// Result of a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// New items, in row order, ready to be prepended
    Created(Vec<ManhuaItem>),
    /// Validated edits keyed by item id
    Edited(Vec<ParsedRow>),
}

impl FormOutcome {
    pub fn success_message(&self) -> String {
        match self {
            FormOutcome::Created(items) if items.len() == 1 => {
                format!("\"{}\" entrou na sua estante.", items[0].name)
            }
            FormOutcome::Created(items) => format!("{} manhuas entraram na sua estante.", items.len()),
            FormOutcome::Edited(rows) if rows.len() == 1 => format!("\"{}\" foi atualizado.", rows[0].name),
            FormOutcome::Edited(rows) => format!("{} manhuas atualizados.", rows.len()),
        }
    }
}

/// The create/edit modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfForm {
    step: FormStep,
    error: Option<ShelfFormError>,
    max_batch: usize,
    description_limit: usize,
}

impl ShelfForm {
    pub fn new(config: &ShelfConfig) -> Self {
        Self {
            step: FormStep::Closed,
            error: None,
            max_batch: config.max_batch.max(1),
            description_limit: config.description_limit,
        }
    }

    pub fn step(&self) -> &FormStep {
        &self.step
    }

    pub fn error(&self) -> Option<&ShelfFormError> {
        self.error.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.step != FormStep::Closed
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.step {
            FormStep::Closed => None,
            FormStep::CountSelection { .. } => Some(FormMode::Create),
            FormStep::Editing { mode, .. } => Some(*mode),
        }
    }

    pub fn rows(&self) -> &[FormRow] {
        match &self.step {
            FormStep::Editing { rows, .. } => rows,
            _ => &[],
        }
    }

    pub fn max_batch(&self) -> usize {
        self.max_batch
    }

    /// Start a create flow at the count-selection step
    pub fn open_create(&mut self) {
        self.step = FormStep::CountSelection { count_input: "1".to_string() };
        self.error = None;
    }

    /// Start an edit flow seeded from `items`. Stays closed when there is nothing to edit.
    pub fn open_edit(&mut self, items: &[ManhuaItem]) -> bool {
        self.error = None;
        if items.is_empty() {
            self.step = FormStep::Closed;
            return false;
        }
        self.step = FormStep::Editing {
            mode: FormMode::Edit,
            rows: items.iter().map(FormRow::from_item).collect(),
        };
        true
    }

    pub fn set_count_input(&mut self, value: impl Into<String>) {
        if let FormStep::CountSelection { count_input } = &mut self.step {
            *count_input = value.into();
        }
    }

    /// Confirm the count and allocate blank rows. Returns the row count.
    pub fn confirm_count(&mut self) -> Option<usize> {
        let FormStep::CountSelection { count_input } = &self.step else {
            return None;
        };
        let count = clamp_count(count_input, self.max_batch);
        self.step = FormStep::Editing {
            mode: FormMode::Create,
            rows: vec![FormRow::default(); count],
        };
        self.error = None;
        Some(count)
    }

    pub fn update_row(&mut self, index: usize, field: RowField, value: impl Into<String>) {
        let limit = self.description_limit;
        let FormStep::Editing { rows, .. } = &mut self.step else {
            return;
        };
        let Some(row) = rows.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            RowField::Name => row.name = value,
            RowField::Description => row.description = cap_description(&value, limit),
            RowField::TotalChapters => row.total_chapters = value,
            RowField::CurrentChapter => row.current_chapter = value,
        }
    }

    /// Discard everything and close
    pub fn close(&mut self) {
        self.step = FormStep::Closed;
        self.error = None;
    }

    /// Validate against the current shelf. On success the form closes; on
    /// failure it stays open with the error recorded.
    pub fn submit(
        &mut self,
        existing: &[ManhuaItem],
        ids: &mut impl IdSource,
    ) -> Result<FormOutcome, ShelfFormError> {
        let mode = self.mode().unwrap_or(FormMode::Create);
        let rows: &[FormRow] = match &self.step {
            FormStep::Editing { rows, .. } => rows,
            _ => &[],
        };

        match validate_rows(mode, rows, existing, self.description_limit) {
            Ok(parsed) => {
                let outcome = match mode {
                    FormMode::Create => FormOutcome::Created(build_created(&parsed, ids)),
                    FormMode::Edit => FormOutcome::Edited(parsed),
                };
                self.close();
                Ok(outcome)
            }
            Err(e) => {
                log::debug!("[FORM] Submit rejected: {:?}", e);
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}

/// Parse a requested row count, clamped to [1, max]. Garbage counts as 1.
pub fn clamp_count(raw: &str, max: usize) -> usize {
    let value = raw.trim().parse::<f64>().unwrap_or(f64::NAN);
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    (value.trunc() as usize).clamp(1, max.max(1))
}
