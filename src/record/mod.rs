//! Listing records and the run accumulator
//!
//! A [`ListingRecord`] always carries all eight fields; a field the page did
//! not provide holds [`PLACEHOLDER`].

mod accumulator;

pub use accumulator::Accumulator;

use serde::{Deserialize, Serialize};

/// Value stored for a field that could not be located
pub const PLACEHOLDER: &str = "N/A";

/// Column order shared by the CSV header and the JSON object keys
pub const FIELD_NAMES: [&str; 8] = [
    "title",
    "price",
    "year",
    "km_driven",
    "fuel_type",
    "location",
    "seller_type",
    "emi",
];

/// The eight attributes extracted from one listing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Price,
    Year,
    KmDriven,
    FuelType,
    Location,
    SellerType,
    Emi,
}

impl Field {
    /// All fields in column order
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Price,
        Field::Year,
        Field::KmDriven,
        Field::FuelType,
        Field::Location,
        Field::SellerType,
        Field::Emi,
    ];

    /// Column name used in both export formats
    pub fn name(self) -> &'static str {
        FIELD_NAMES[self as usize]
    }
}

/// One used-car listing
///
/// Built once from a parsed listing element and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    title: String,
    price: String,
    year: String,
    km_driven: String,
    fuel_type: String,
    location: String,
    seller_type: String,
    emi: String,
}

impl ListingRecord {
    /// Builds a record by asking `lookup` for every field in column order
    ///
    /// `None` becomes [`PLACEHOLDER`].
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(Field) -> Option<String>,
    {
        let mut value = |field| lookup(field).unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            title: value(Field::Title),
            price: value(Field::Price),
            year: value(Field::Year),
            km_driven: value(Field::KmDriven),
            fuel_type: value(Field::FuelType),
            location: value(Field::Location),
            seller_type: value(Field::SellerType),
            emi: value(Field::Emi),
        }
    }

    /// Builds a record from literal values in column order
    pub fn from_values(values: [&str; 8]) -> Self {
        Self::from_lookup(|field| Some(values[field as usize].to_string()))
    }

    /// Returns the value of one field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Price => &self.price,
            Field::Year => &self.year,
            Field::KmDriven => &self.km_driven,
            Field::FuelType => &self.fuel_type,
            Field::Location => &self.location,
            Field::SellerType => &self.seller_type,
            Field::Emi => &self.emi,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns every value in column order
    pub fn values(&self) -> [&str; 8] {
        Field::ALL.map(|field| self.get(field))
    }

    /// True when no field was found on the page
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|v| *v == PLACEHOLDER)
    }
}
