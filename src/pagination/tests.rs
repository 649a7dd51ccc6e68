use super::*;

struct FakePage {
    total: String,
    items: Vec<u64>,
}

impl Page for FakePage {
    type Item = u64;

    fn total(&self) -> &str {
        &self.total
    }

    fn into_items(self) -> Vec<u64> {
        self.items
    }
}

/// Serves `total` sequential items, `page_size` at a time, recording the
/// offsets requested.
fn serve(total: u64, declared: &str, offsets: &mut Vec<u64>) -> impl FnMut(u64, u32) -> Result<(FakePage, ResponseMeta), ClientError> {
    let declared = declared.to_string();
    move |offset, length| {
        offsets.push(offset);
        let end = (offset + u64::from(length)).min(total);
        let page = FakePage {
            total: declared.clone(),
            items: (offset..end).collect(),
        };
        Ok((page, ResponseMeta::default()))
    }
}

#[test]
fn single_page() {
    let mut offsets = Vec::new();
    let (items, _) = collect_pages(DEFAULT_PAGE_SIZE, serve(2, "2", &mut offsets)).unwrap();

    assert_eq!(items, [0, 1]);
    assert_eq!(offsets, [0]);
}

#[test]
fn requests_ceil_total_over_page_size() {
    let mut offsets = Vec::new();
    let (items, _) = collect_pages(3, serve(10, "10", &mut offsets)).unwrap();

    assert_eq!(items, (0..10).collect::<Vec<_>>());
    assert_eq!(offsets, [0, 3, 6, 9]);
}

#[test]
fn exact_multiple_of_page_size() {
    let mut offsets = Vec::new();
    let (items, _) = collect_pages(5, serve(10, "10", &mut offsets)).unwrap();

    assert_eq!(items.len(), 10);
    assert_eq!(offsets, [0, 5]);
}

#[test]
fn missing_total_stops_after_first_page() {
    let mut offsets = Vec::new();
    let (items, _) = collect_pages(2, serve(10, "", &mut offsets)).unwrap();

    assert_eq!(items, [0, 1]);
    assert_eq!(offsets, [0]);
}

#[test]
fn unparsable_total_is_an_error() {
    let mut offsets = Vec::new();
    let err = collect_pages(2, serve(10, "lots", &mut offsets)).unwrap_err();

    assert!(matches!(err, ClientError::InvalidTotal(ref t) if t == "lots"));
    assert!(err.is_decode());
    assert_eq!(offsets, [0]);
}

#[test]
fn empty_page_before_total_stops() {
    let mut offsets = Vec::new();
    let err = collect_pages(4, serve(5, "8", &mut offsets)).unwrap_err();

    assert!(matches!(
        err,
        ClientError::StalledPagination {
            received: 5,
            total: 8
        }
    ));
    assert_eq!(offsets, [0, 4, 8]);
}

#[test]
fn zero_page_size_is_rejected() {
    let mut offsets = Vec::new();
    let err = collect_pages(0, serve(5, "5", &mut offsets)).unwrap_err();

    assert!(matches!(err, ClientError::InvalidPageSize));
    assert!(offsets.is_empty());
}

#[test]
fn error_aborts_without_partial_results() {
    let mut calls = 0;
    let result = collect_pages(2, |offset, _| {
        calls += 1;
        if offset > 0 {
            return Err(ClientError::InvalidTotal("boom".to_string()));
        }
        Ok((
            FakePage {
                total: "4".to_string(),
                items: vec![1, 2],
            },
            ResponseMeta::default(),
        ))
    });

    assert!(result.is_err());
    assert_eq!(calls, 2);
}
