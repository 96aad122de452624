pub mod create_collection;
