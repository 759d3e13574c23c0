pub mod catalog_repo;
pub mod favorite_store;
pub mod seed;
