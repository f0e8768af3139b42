use crate::record::ListingRecord;

/// The two fixed records written when a run collects nothing
pub fn sample_records() -> Vec<ListingRecord> {
    vec![
        ListingRecord::from_values([
            "Sample Car 1",
            "₹5,00,000",
            "2020",
            "50,000",
            "Petrol",
            "Mumbai",
            "Dealer",
            "₹15,000",
        ]),
        ListingRecord::from_values([
            "Sample Car 2",
            "₹7,50,000",
            "2019",
            "30,000",
            "Diesel",
            "Delhi",
            "Individual",
            "₹20,000",
        ]),
    ]
}
