pub mod comparisons;
pub mod deals;
pub mod search;
pub mod site;
pub mod submissions;
pub mod taxonomy;
pub mod tools;
