pub mod favorite;
pub mod filter;
pub mod presentation;
pub mod restaurant;
pub mod search;
