pub mod persistence_type;

pub use persistence_type::PersistenceType;
