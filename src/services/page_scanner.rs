use futures::StreamExt;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::domain::{
    category::SiteCategory,
    footprint::{last_segment, partner_id, remove_from_service_flags},
    page_result::{PageResult, NOT_FOUND},
};

const MAX_CONCURRENT_FETCHES: usize = 8;

/// Scans every link and returns one `PageResult` per link, in input order.
/// Fetches run through a bounded buffered stream; a failed URL degrades to a
/// `"Not found"` row and never aborts the rest of the batch.
pub async fn scan_pages(links: &[String]) -> Vec<PageResult> {
    let client = Client::new();

    futures::stream::iter(links.iter().map(|link| scan_page(&client, link)))
        .buffered(MAX_CONCURRENT_FETCHES)
        .collect()
        .await
}

pub async fn scan_page(client: &Client, link: &str) -> PageResult {
    match fetch_markup(client, link).await {
        Ok(markup) => scan_markup(link, &markup),
        Err(e) => {
            log::error!("Failed to fetch page: {} Error: {:?}", link, e);
            PageResult::not_found(link)
        }
    }
}

async fn fetch_markup(client: &Client, link: &str) -> Result<String, reqwest::Error> {
    let response = client.get(link).send().await?;
    response.error_for_status()?.text().await
}

/// Pulls the two marker attributes out of the first `header` and `footer`
/// elements and builds the report row. Missing elements or attributes read
/// as empty and collapse to `"Not found"`.
pub fn scan_markup(link: &str, markup: &str) -> PageResult {
    let document = Html::parse_document(markup);
    let header_selector = Selector::parse("header").unwrap();
    let footer_selector = Selector::parse("footer").unwrap();

    let raw_header = document
        .select(&header_selector)
        .next()
        .and_then(|tag| tag.value().attr("data-header-footprint"))
        .unwrap_or_default();
    let raw_footer = document
        .select(&footer_selector)
        .next()
        .and_then(|tag| tag.value().attr("data-footer-footprint"))
        .unwrap_or_default();

    let header = remove_from_service_flags(raw_header);
    let footer = remove_from_service_flags(raw_footer);

    let header_segment = last_segment(&header);
    let footer_segment = last_segment(&footer);
    let category = SiteCategory::from_markers(&header_segment, &footer_segment);

    PageResult {
        link: link.to_string(),
        header_partner_id: or_not_found(partner_id(&header)),
        footer_partner_id: or_not_found(partner_id(&footer)),
        header_footprint: or_not_found(header_segment),
        footer_footprint: or_not_found(footer_segment),
        category,
    }
}

fn or_not_found(value: String) -> String {
    match value.is_empty() {
        true => NOT_FOUND.to_string(),
        false => value,
    }
}
