pub mod index_file;
pub mod layout;
