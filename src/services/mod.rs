pub mod page_scanner;
pub mod report;

pub use page_scanner::*;
pub use report::*;
