pub mod catalogue;
pub mod category;
pub mod filter;
pub mod query;
pub mod ranking;
