mod error;
mod file_store;
