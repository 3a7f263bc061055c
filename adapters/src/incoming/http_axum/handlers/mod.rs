pub mod composite;
pub mod health;
