//! This client fetches the council's property page and parses it into collection dates.

use std::ops::Range;

use regex::Regex;
use reqwest::Response;
use scraper::{Html, Selector};

use crate::{
    date::parse_collection_date,
    model::{Category, CollectionRecord},
    Error,
};

pub static URL: &str = "https://digital.wyndham.vic.gov.au/myWyndham/init-map-data.asp";
pub static DEFAULT_PROPERTY_NUMBER: &str = "172369";
pub const DEFAULT_RADIUS: u32 = 2000;

/// Selects the information blocks of the property page.
static ITEM_SELECTOR: &str = "div.infocaritem";
/// The positions of the garbage, green waste and recycling blocks, in any order.
///
/// Changing the page layout upstream requires changing this range.
const COLLECTION_ITEMS: Range<usize> = 4..7;

/// Fetches collection dates from the council.
#[derive(Debug, Clone)]
pub struct CouncilClient {
    client: reqwest::Client,
    url: String,
}

impl Default for CouncilClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CouncilClient {
    pub fn new() -> Self {
        Self::with_url(URL)
    }

    /// Use another endpoint instead of the council's.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Get the collection dates for a specific property.
    pub async fn get(&self, property_number: &str, radius: u32) -> Result<CollectionRecord, Error> {
        let response = self.get_response(property_number, radius).await?;
        let record = parse(&response.text().await?)?;
        Ok(record)
    }

    /// Get the property page from the official server.
    async fn get_response(&self, property_number: &str, radius: u32) -> Result<Response, Error> {
        tracing::info!(property_number, radius, url = %self.url, "fetching collection page");
        let radius = radius.to_string();
        let response = self
            .client
            .get(&self.url)
            .query(&[("propnum", property_number), ("radius", radius.as_str())])
            .send()
            .await?
            .error_for_status()?;
        Ok(response)
    }
}

/// Parse the property page HTML to the collection dates.
///
/// Every category must be found in the expected blocks.
pub fn parse(html: &str) -> Result<CollectionRecord, Error> {
    let dom = Html::parse_document(html);
    let item_selector =
        Selector::parse(ITEM_SELECTOR).map_err(|err| Error::Pattern(err.to_string()))?;
    let whitespace_regex = Regex::new(r"\s+").map_err(|err| Error::Pattern(err.to_string()))?;
    let mut record = CollectionRecord::new();
    let items = dom
        .select(&item_selector)
        .skip(COLLECTION_ITEMS.start)
        .take(COLLECTION_ITEMS.len());
    for item in items {
        let text = item.text().collect::<String>();
        let text = whitespace_regex.replace_all(text.trim(), " ");
        tracing::info!(item = %text, "collection item");
        let Some((label, detail)) = text.split_once(':') else {
            return Err(Error::MissingLabel(text.to_string()));
        };
        let Some(category) = Category::classify(label) else {
            tracing::warn!(label, "unknown collection item");
            continue;
        };
        record.insert(category, parse_collection_date(detail)?);
    }
    if let Some(category) = Category::ALL
        .into_iter()
        .find(|category| !record.contains(*category))
    {
        return Err(Error::MissingCategory(category));
    }
    Ok(record)
}
