pub mod donor;
pub mod user;
