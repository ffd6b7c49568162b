/// Classification of an incoming message text.
///
/// Matching is exact: no trimming and no case folding, so `"/start "` is a
/// search and `"/ulasan  Judul"` looks up `" Judul"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Start,
    Help,
    /// `/ulasan` without a product name.
    ReviewUsage,
    /// `/ulasan <exact product name>`.
    Review(&'a str),
    /// Anything else is a free-text product search.
    Search(&'a str),
}

pub const START: &str = "/start";
pub const HELP: &str = "/help";
pub const REVIEW: &str = "/ulasan";
const REVIEW_PREFIX: &str = "/ulasan ";

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        match text {
            START => Command::Start,
            HELP => Command::Help,
            REVIEW => Command::ReviewUsage,
            _ => match text.strip_prefix(REVIEW_PREFIX) {
                Some(product_name) => Command::Review(product_name),
                None => Command::Search(text),
            },
        }
    }
}
