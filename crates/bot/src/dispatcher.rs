use bokfinder_catalogue::Catalogue;
use bokfinder_infra::config::DEFAULT_REVIEW_SUBMIT_URL;

use crate::command::Command;
use crate::reply::{self, Reply};

/// Turns one incoming text into the replies to send back.
///
/// Holds no catalogue of its own; every call works on the snapshot it is
/// given, so a reload between two messages is picked up on the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatcher {
    review_submit_url: String,
}

impl Dispatcher {
    pub fn new(review_submit_url: impl Into<String>) -> Self {
        Self {
            review_submit_url: review_submit_url.into(),
        }
    }

    pub fn handle(&self, catalogue: &Catalogue, text: &str) -> Vec<Reply> {
        match Command::parse(text) {
            Command::Start => vec![reply::welcome()],
            Command::Help => vec![reply::help(&self.review_submit_url)],
            Command::ReviewUsage => vec![reply::review_usage()],
            Command::Review(product_name) => {
                let (url, found) = catalogue.find_review_link(product_name);
                tracing::debug!(product = product_name, found, "review lookup");
                if found {
                    vec![reply::review_found(product_name, &url)]
                } else {
                    vec![reply::review_missing(product_name, &self.review_submit_url)]
                }
            }
            Command::Search(query) => {
                let matches = catalogue.find_products(query);
                tracing::debug!(matches = matches.len(), "product search");
                if matches.is_empty() {
                    vec![reply::product_not_found()]
                } else {
                    matches.into_iter().map(reply::product).collect()
                }
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEW_SUBMIT_URL)
    }
}
