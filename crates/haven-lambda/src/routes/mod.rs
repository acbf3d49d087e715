pub mod health;
pub mod instruments;
pub mod mood;
pub mod screenings;
