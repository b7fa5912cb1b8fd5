pub mod builder;
pub mod layout;
