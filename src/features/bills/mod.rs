pub mod dto;
pub mod filter;
pub mod handler;
mod helpers;
pub mod service;
pub mod store;

pub use dto::{BillDto, BillQueryParams, BillRecord, TagFlags};
pub use filter::{BillFilter, Predicate, build_bills_query};
pub use handler::{handle_list_bills, handle_list_states};
pub use helpers::{build_bill_link, parse_bill_query};
pub use service::BillService;
pub use store::{BillStore, PgBillStore};
