//! Data model shared by the farm stand server and its seed script.
//!
//! - `model`: the two stored record types (`Farm`, `Product`), the product
//!   `Category` and the `DocId` every stored record is keyed by.
//! - `requests`: form and query payloads submitted by the HTML views.

pub mod model;
pub mod requests;
