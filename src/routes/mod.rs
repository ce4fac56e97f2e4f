pub mod checks;
pub mod health;
pub mod me;
pub mod scopes;
