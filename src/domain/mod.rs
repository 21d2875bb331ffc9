pub mod category;
pub mod footprint;
pub mod page_result;
