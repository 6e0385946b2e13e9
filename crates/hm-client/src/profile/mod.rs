mod backend;
mod memory;
mod postgres;
mod store;

pub use backend::ProfileBackend;
pub use memory::MemoryProfileBackend;
pub use postgres::PgProfileBackend;
pub use store::UserProfileStore;
