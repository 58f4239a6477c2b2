// Core modules implementing boundary classification, lookup, and error modeling.
pub mod boundary;
pub mod error;
pub mod registry;
