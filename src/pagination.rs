use std::future::Future;
use crate::errors::YouTubeError;

/// One page of a YouTube Data API list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page_token: Option<String>,
}

/// Page-token cursor shared by every list endpoint.
///
/// Starts at `FirstPage`; after each fetch `advance` moves to `NextPage` when the
/// response carried a continuation token and to `Done` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    FirstPage,
    NextPage(String),
    Done,
}

impl PageCursor {
    /// Token to request next, `None` once the cursor is done.
    /// The inner `None` means "no pageToken parameter".
    pub fn pending(&self) -> Option<Option<String>> {
        match self {
            PageCursor::FirstPage => Some(None),
            PageCursor::NextPage(token) => Some(Some(token.clone())),
            PageCursor::Done => None,
        }
    }

    pub fn advance(&mut self, next_page_token: Option<String>) {
        // an empty token would re-request the first page forever
        *self = match next_page_token {
            Some(token) if !token.is_empty() => PageCursor::NextPage(token),
            _ => PageCursor::Done,
        };
    }
}

/// Drains every page of a list endpoint, keeping page order then intra-page order.
pub async fn fetch_all<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, YouTubeError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>, YouTubeError>>,
{
    let mut items = Vec::new();
    let mut cursor = PageCursor::FirstPage;

    while let Some(page_token) = cursor.pending() {
        let page = fetch(page_token).await?;
        items.extend(page.items);
        cursor.advance(page.next_page_token);
    }

    Ok(items)
}
