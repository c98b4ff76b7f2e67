pub mod fetch;
pub mod truthy;
