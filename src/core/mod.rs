pub mod clients;
pub mod fields;
pub mod hours;
pub mod normalize;
pub mod resolve;
pub mod scope;
pub mod summary;
pub mod view;
