pub mod aggregate;

pub use aggregate::Listing;
