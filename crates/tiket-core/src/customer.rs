//! Customer reference data.
//!
//! Customers are banks for which tickets are tracked. The full record set
//! comes from a separate, unauthenticated reference endpoint; the report
//! generator additionally works from a small fixed roster of bank slugs.

use serde::{Deserialize, Serialize};

use crate::listing::Filterable;

/// A customer record from the reference endpoint. Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    /// Customer (bank) display name
    pub customer: String,
    #[serde(default)]
    pub application_name: String,
    #[serde(default)]
    pub android_bundle_id: Option<String>,
    #[serde(default)]
    pub ios_bundle_id: Option<String>,
    #[serde(default)]
    pub number_of_download: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub expired_date: Option<String>,
    #[serde(default)]
    pub technical_contact: Option<String>,
    #[serde(default)]
    pub sales_contact: Option<String>,
    #[serde(default)]
    pub partner: Option<String>,
    #[serde(default)]
    pub pic_partner: Option<String>,
}

impl Filterable for Customer {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.customer.as_str(), self.application_name.as_str()];
        for value in [
            &self.number_of_download,
            &self.product,
            &self.expired_date,
        ] {
            if let Some(v) = value {
                fields.push(v.as_str());
            }
        }
        fields
    }

    fn filter_key(&self) -> Option<String> {
        None
    }
}

/// One entry in the fixed roster used by the report generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    /// Slug used in API paths (e.g., "mandiri")
    pub id: &'static str,
    /// Display name (e.g., "Bank Mandiri")
    pub name: &'static str,
}

/// The banks covered by the report roster.
pub const BANKS: [Bank; 3] = [
    Bank {
        id: "mandiri",
        name: "Bank Mandiri",
    },
    Bank {
        id: "bni",
        name: "Bank BNI",
    },
    Bank {
        id: "bsi",
        name: "Bank Syariah Indonesia",
    },
];

/// Looks up a bank by its slug, case-insensitively.
pub fn bank_by_id(id: &str) -> Option<Bank> {
    let id = id.to_lowercase();
    BANKS.iter().copied().find(|bank| bank.id == id)
}
