// Adapters layer: concrete implementations for external systems (knowledge file, lead store, storage)

pub mod knowledge;
pub mod leads;
pub mod storage;

pub use knowledge::FileKnowledge;
pub use leads::SupabaseLeads;
pub use storage::LocalStorage;
