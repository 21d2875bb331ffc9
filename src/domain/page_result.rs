use crate::domain::category::SiteCategory;

pub const NOT_FOUND: &str = "Not found";

/// One report row. String fields hold the already-normalized marker values,
/// collapsed to `"Not found"` when the page could not be fetched or the
/// marker was absent.
#[derive(Debug, PartialEq, Clone)]
pub struct PageResult {
    pub link: String,
    pub header_partner_id: String,
    pub footer_partner_id: String,
    pub header_footprint: String,
    pub footer_footprint: String,
    pub category: SiteCategory,
}

impl PageResult {
    /// Row for a URL whose fetch failed outright.
    pub fn not_found(link: &str) -> Self {
        PageResult {
            link: link.to_string(),
            header_partner_id: NOT_FOUND.to_string(),
            footer_partner_id: NOT_FOUND.to_string(),
            header_footprint: NOT_FOUND.to_string(),
            footer_footprint: NOT_FOUND.to_string(),
            category: SiteCategory::Others,
        }
    }
}
