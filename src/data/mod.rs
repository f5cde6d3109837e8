mod loader;

pub use loader::{DEFAULT_PAIRS_PATH, LoadError, load_records_from_json};
