use serde::{Deserialize, Serialize};

use crate::encoding::null_as_empty;

/// A holder's stake in one issue.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Owner {
    pub company: String,
    pub quantity: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CommercialPaper {
    pub cusip: String,
    pub ticker: String,
    pub par: f64,
    pub qty: i64,
    pub discount: f64,
    /// Days from issue to maturity.
    pub maturity: i64,
    #[serde(rename = "owner", default, deserialize_with = "null_as_empty")]
    pub owners: Vec<Owner>,
    pub issuer: String,
    /// Epoch milliseconds, kept as a decimal string.
    #[serde(rename = "issueDate")]
    pub issue_date: String,
}

/// A proposed sale of paper between two companies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub cusip: String,
    #[serde(rename = "fromCompany")]
    pub from_company: String,
    #[serde(rename = "toCompany")]
    pub to_company: String,
    pub quantity: i64,
    pub discount: f64,
}
