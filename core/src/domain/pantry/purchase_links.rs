use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Platform {
    Blinkit,
    Zepto,
    Instamart,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Blinkit, Platform::Zepto, Platform::Instamart];

    pub fn search_url(&self) -> &'static str {
        match self {
            Platform::Blinkit => "https://blinkit.com/s/?q=",
            Platform::Zepto => "https://app.zeptonow.com/search?q=",
            Platform::Instamart => "https://www.swiggy.com/instamart/search?query=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseLink {
    pub platform: Platform,
    pub url: String,
}

/// Search link for `item_name` on `platform`, tagged with the affiliate id.
pub fn create_affiliated_link(item_name: &str, platform: Platform, affiliate_tag: &str) -> String {
    let encoded_item: String = byte_serialize(item_name.as_bytes()).collect();
    let encoded_tag: String = byte_serialize(affiliate_tag.as_bytes()).collect();

    format!("{}{}&tag={}", platform.search_url(), encoded_item, encoded_tag)
}

pub fn purchase_links_for(item_name: &str, affiliate_tag: &str) -> Vec<PurchaseLink> {
    Platform::ALL
        .iter()
        .map(|platform| PurchaseLink {
            platform: *platform,
            url: create_affiliated_link(item_name, *platform, affiliate_tag),
        })
        .collect()
}
