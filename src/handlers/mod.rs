pub mod health;
pub mod hospital;
