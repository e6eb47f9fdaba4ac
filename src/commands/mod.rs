pub mod import;
pub mod import_all;
pub mod list;

pub use import::ImportCommand;
pub use import_all::ImportAllCommand;
pub use list::ListCommand;
