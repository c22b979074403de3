//! Dobrodon platform API client

pub mod api;
pub mod dobrodon;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{BonusApi, DirectoryApi, PeopleApi};
pub use dobrodon::DobrodonClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockDobrodonClient;
