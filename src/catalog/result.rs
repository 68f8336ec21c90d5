use crate::catalog::ItemRecord;

/// Ordered collection of records from one crawl
///
/// Records are only ever appended, so order follows category order, then page
/// order, then position on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    records: Vec<ItemRecord>,
}

impl CrawlResult {
    pub fn extend(&mut self, records: impl IntoIterator<Item = ItemRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[ItemRecord] {
        &self.records
    }
}
