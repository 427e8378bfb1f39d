pub(crate) mod import;
pub(crate) mod library;

pub use import::{decode_batch, decode_game, payload_records};
pub use library::{ImportReport, LibraryService, ListFilter};
