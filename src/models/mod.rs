pub mod profile;
pub mod scope;
