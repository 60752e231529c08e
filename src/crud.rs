//! CRUD Workflows
//!
//! Page state and the create / edit / delete sequences shared by every
//! record kind. After each successful mutation the full list is fetched
//! again; nothing is patched locally. A failed mutation stops its sequence
//! and is only logged.

use async_trait::async_trait;

use crate::commands::CommandClient;
use crate::fields::{parse_number, Editable};
use crate::record::Record;
use crate::validation::ValidationError;

/// The fetched list for one page
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCache<T> {
    records: Vec<T>,
    loading: bool,
}

impl<T> Default for RecordCache<T> {
    fn default() -> Self {
        Self { records: Vec::new(), loading: true }
    }
}

impl<T> RecordCache<T> {
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// True until the first fetch settles
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A failed fetch keeps the previous list
    pub fn apply_fetch(&mut self, fetched: Result<Vec<T>, String>) {
        if let Ok(records) = fetched {
            self.records = records;
        }
        self.loading = false;
    }
}

/// Create-form state: the draft and the error currently shown
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<D> {
    draft: D,
    error: Option<ValidationError>,
}

impl<D: Editable> FormState<D> {
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn edit(&mut self, field: D::Field, raw: &str) {
        self.draft.set_field(field, raw);
    }

    /// Validate on submit. Shows the first failure, or clears the error
    /// and returns the payload. The draft is kept either way.
    pub fn check<N>(&mut self, validate: impl FnOnce(&D) -> Result<N, ValidationError>) -> Option<N> {
        match validate(&self.draft) {
            Ok(new) => {
                self.error = None;
                Some(new)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

/// Edit dialog state; open while a record is selected.
///
/// Numeric text that does not parse is kept as typed instead of being
/// written into the record, and blocks saving until it is corrected.
pub struct DialogState<T: Editable> {
    selected: Option<T>,
    rejected: Vec<(T::Field, String)>,
}

impl<T: Editable> Default for DialogState<T> {
    fn default() -> Self {
        Self { selected: None, rejected: Vec::new() }
    }
}

impl<T: Editable + Clone> Clone for DialogState<T> {
    fn clone(&self) -> Self {
        Self {
            selected: self.selected.clone(),
            rejected: self.rejected.clone(),
        }
    }
}

impl<T: Editable> DialogState<T> {
    pub fn open(&mut self, record: T) {
        self.selected = Some(record);
        self.rejected.clear();
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.rejected.clear();
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Text shown in the field's input
    pub fn field_text(&self, field: T::Field) -> String {
        match self.rejected.iter().find(|(f, _)| *f == field) {
            Some((_, raw)) => raw.clone(),
            None => self
                .selected
                .as_ref()
                .map(|record| record.field_value(field))
                .unwrap_or_default(),
        }
    }

    pub fn is_rejected(&self, field: T::Field) -> bool {
        self.rejected.iter().any(|(f, _)| *f == field)
    }

    pub fn edit(&mut self, field: T::Field, raw: &str) {
        let Some(record) = self.selected.as_mut() else {
            return;
        };
        self.rejected.retain(|(f, _)| *f != field);
        if T::is_numeric(field) && parse_number(raw).is_none() {
            self.rejected.push((field, raw.to_string()));
            return;
        }
        record.set_field(field, raw);
    }
}

impl<T: Record> DialogState<T> {
    /// Close only if record `id` is still the one being edited
    pub fn close_if_editing(&mut self, id: u32) {
        if self.selected.as_ref().map(|record| record.id()) == Some(id) {
            self.close();
        }
    }
}

/// Something that can re-fetch a page's list into its cache
#[async_trait(?Send)]
pub trait Refetch {
    async fn refetch(&self);
}

/// Fetch the full list, logging failures
pub async fn load<T: Record>(client: &dyn CommandClient) -> Result<Vec<T>, String> {
    let fetched = T::list(client).await;
    match &fetched {
        Ok(records) => log::debug!("Fetched {} {}", records.len(), T::COLLECTION),
        Err(e) => log::error!("Error fetching {}: {}", T::COLLECTION, e),
    }
    fetched
}

pub async fn create<T: Record>(
    client: &dyn CommandClient,
    new: &T::New,
    page: &dyn Refetch,
) -> Result<(), String> {
    T::add(client, new).await?;
    log::info!("Added to {}", T::COLLECTION);
    page.refetch().await;
    Ok(())
}

pub async fn remove<T: Record>(
    client: &dyn CommandClient,
    id: u32,
    page: &dyn Refetch,
) -> Result<(), String> {
    T::delete(client, id).await?;
    log::info!("Deleted {} from {}", id, T::COLLECTION);
    page.refetch().await;
    Ok(())
}

/// Persist the selected record as a whole, refetch, then close the dialog.
/// Unparsed numeric text or a backend failure leaves the dialog open
/// with its edits and sends nothing further.
pub async fn save<T: Record>(
    client: &dyn CommandClient,
    dialog: &mut DialogState<T>,
    page: &dyn Refetch,
) -> Result<(), String> {
    let Some(record) = dialog.selected().cloned() else {
        return Ok(());
    };
    if let Some((_, raw)) = dialog.rejected.first() {
        return Err(format!("Not a number: {:?}", raw));
    }
    T::update(client, &record).await?;
    log::info!("Updated {} in {}", record.id(), T::COLLECTION);
    page.refetch().await;
    dialog.close();
    Ok(())
}
