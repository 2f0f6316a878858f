pub mod page;
pub mod product;
pub mod report;
pub mod user;
