// Service exports
pub mod matching;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod supabase;

pub use matching::MentorMatchingService;
pub use memory::{Fixtures, InMemoryProfileStore};
pub use postgres::PostgresProfileStore;
pub use store::{ProfileStore, StoreError};
pub use supabase::{SupabaseClient, SupabaseTables};
