use docdash_contract::{DocdashError, DocumentId, DocumentRecord, VersionEntry};
use tracing::debug;

use crate::fixtures;
use crate::search::filter_documents;
use crate::sort::{SortField, SortState};

/// Page-level state of the document list: the loaded records plus the
/// current search query and table sort. The records are never modified;
/// [`DocumentLibrary::view`] derives the visible rows on demand.
#[derive(Debug, Clone)]
pub struct DocumentLibrary {
    documents: Vec<DocumentRecord>,
    query: String,
    sort: SortState,
}

impl DocumentLibrary {
    pub fn new(documents: Vec<DocumentRecord>) -> Self {
        Self {
            documents,
            query: String::new(),
            sort: SortState::default(),
        }
    }

    pub fn with_fixtures() -> Self {
        Self::new(fixtures::sample_documents())
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!(query = %self.query, "document search updated");
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort.toggle(field);
        debug!(field = ?self.sort.field, direction = ?self.sort.direction, "document sort toggled");
    }

    /// Search first, then sort, matching the page feeding the table.
    pub fn view(&self) -> Vec<DocumentRecord> {
        let filtered = filter_documents(&self.documents, &self.query);
        self.sort.apply(&filtered)
    }

    pub fn find(&self, id: DocumentId) -> Result<&DocumentRecord, DocdashError> {
        self.documents
            .iter()
            .find(|doc| doc.id == id)
            .ok_or(DocdashError::DocumentNotFound(id))
    }

    pub fn version_history(&self, id: DocumentId) -> Result<Vec<VersionEntry>, DocdashError> {
        self.find(id)?;
        Ok(fixtures::sample_version_history())
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentLibrary;
    use crate::sort::{SortDirection, SortField, SortState};
    use docdash_contract::DocdashError;

    #[test]
    fn default_view_is_newest_first() {
        let library = DocumentLibrary::with_fixtures();
        let ids: Vec<u64> = library.view().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn view_applies_search_then_sort() {
        let mut library = DocumentLibrary::with_fixtures();
        library.set_query("i");
        library.set_sort(SortState::new(SortField::Name, SortDirection::Asc));

        let names: Vec<String> = library.view().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "Design_Mockups.psd",
                "Marketing_Strategy.docx",
                "Project_Timeline.xlsx",
                "Q4_Financial_Report.pdf",
            ]
        );
    }

    #[test]
    fn empty_view_when_nothing_matches() {
        let mut library = DocumentLibrary::with_fixtures();
        library.set_query("zzz");
        assert!(library.view().is_empty());
        assert_eq!(library.documents().len(), 4);
    }

    #[test]
    fn toggling_twice_restores_order() {
        let mut library = DocumentLibrary::with_fixtures();
        library.toggle_sort(SortField::Size);
        let first = library.view();
        library.toggle_sort(SortField::Size);
        library.toggle_sort(SortField::Size);
        assert_eq!(library.view(), first);
    }

    #[test]
    fn history_requires_known_document() {
        let library = DocumentLibrary::with_fixtures();
        assert_eq!(library.version_history(1).map(|h| h.len()), Ok(5));
        assert_eq!(
            library.version_history(99),
            Err(DocdashError::DocumentNotFound(99))
        );
    }
}
