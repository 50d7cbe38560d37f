pub mod error;
pub mod file_loader;
pub mod part;
pub mod store;

pub use error::{CatalogError, NotFound};
pub use file_loader::CatalogLoader;
pub use part::{Part, PartEntry};
pub use store::{Catalog, enumerate_ids, resolve};
