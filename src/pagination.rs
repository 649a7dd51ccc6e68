use crate::{ClientError, ResponseMeta};

/// Number of items requested per page unless the caller asks otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 3000;

/// A single page of a list response.
pub(crate) trait Page {
    type Item;

    /// The total number of items the API declares, as sent on the wire.
    fn total(&self) -> &str;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Parses a declared total. An empty total means the API didn't declare one.
fn parse_total(total: &str) -> Result<Option<u64>, ClientError> {
    let total = total.trim();
    if total.is_empty() {
        return Ok(None);
    }
    total
        .parse()
        .map(Some)
        .map_err(|_| ClientError::InvalidTotal(total.to_string()))
}

/// Fetches pages of `page_size` items at increasing offsets until the
/// declared total has been collected.
///
/// `fetch_page` is called with the offset and the page size. The first error
/// aborts the whole listing; nothing collected so far is returned.
pub(crate) fn collect_pages<P, F>(
    page_size: u32,
    mut fetch_page: F,
) -> Result<(Vec<P::Item>, ResponseMeta), ClientError>
where
    P: Page,
    F: FnMut(u64, u32) -> Result<(P, ResponseMeta), ClientError>,
{
    if page_size == 0 {
        return Err(ClientError::InvalidPageSize);
    }

    let mut offset = 0;
    let mut items = Vec::new();
    loop {
        let (page, meta) = fetch_page(offset, page_size)?;
        let total = parse_total(page.total())?;
        let page_items = page.into_items();
        let received = page_items.len();
        items.extend(page_items);

        tracing::debug!(offset, received, collected = items.len(), ?total, "fetched page");

        let Some(total) = total else {
            return Ok((items, meta));
        };
        if items.len() as u64 >= total {
            return Ok((items, meta));
        }
        if received == 0 {
            return Err(ClientError::StalledPagination {
                received: items.len(),
                total,
            });
        }

        offset += u64::from(page_size);
    }
}

#[cfg(test)]
mod tests;
