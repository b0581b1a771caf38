pub mod donor_mapper;
pub mod user_mapper;
