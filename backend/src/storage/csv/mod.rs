pub mod connection;
pub mod donor_repository;
pub mod record_store;
pub mod user_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use donor_repository::DonorRepository;
pub use record_store::RecordStore;
pub use user_repository::UserRepository;
