use crate::record::ListingRecord;

/// Ordered, append-only collection of the records gathered during one run
#[derive(Debug, Default)]
pub struct Accumulator {
    records: Vec<ListingRecord>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ListingRecord) {
        self.records.push(record);
    }

    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = ListingRecord>,
    {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ListingRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ListingRecord> {
        self.records
    }
}
