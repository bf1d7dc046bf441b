pub mod remedies;
