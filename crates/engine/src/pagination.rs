//! Offset pagination with navigation metadata.

use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine, schema::Schema};

/// A validated page request.
///
/// `page` and `page_size` are both at least 1; the effective page size is
/// the requested one clamped to `max_page_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    max_page_size: u32,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64, max_page_size: u32) -> ResultEngine<Self> {
        let page = u32::try_from(page)
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| EngineError::InvalidPage(format!("page must be >= 1, got {page}")))?;
        if page_size < 1 {
            return Err(EngineError::InvalidPage(format!(
                "pageSize must be >= 1, got {page_size}"
            )));
        }
        let max_page_size = max_page_size.max(1);
        let page_size = u32::try_from(page_size).unwrap_or(u32::MAX);

        Ok(Self {
            page,
            page_size,
            max_page_size,
        })
    }

    /// Page request for `T`, filling in the resource defaults.
    pub fn for_resource<T: Schema>(page: Option<i64>, page_size: Option<i64>) -> ResultEngine<Self> {
        Self::new(
            page.unwrap_or(1),
            page_size.unwrap_or(i64::from(T::DEFAULT_PAGE_SIZE)),
            T::MAX_PAGE_SIZE,
        )
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn requested_page_size(&self) -> u32 {
        self.page_size
    }

    /// Effective page size.
    pub fn page_size(&self) -> u32 {
        self.page_size.min(self.max_page_size)
    }

    fn offset(&self) -> usize {
        let offset = u64::from(self.page_size()) * u64::from(self.page - 1);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }
}

/// Pagination summary, serialized into the `X-Pagination` header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
    pub previous_page_link: String,
    pub next_page_link: String,
}

/// One page of items plus its metadata.
#[derive(Debug, PartialEq)]
pub struct Page<I> {
    pub items: Vec<I>,
    pub metadata: PaginationMetadata,
}

impl<I> Page<I> {
    pub fn try_map<J, E, F>(self, f: F) -> Result<Page<J>, E>
    where
        F: FnMut(I) -> Result<J, E>,
    {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, E>>()?,
            metadata: self.metadata,
        })
    }
}

/// Slice `items` to the requested page.
///
/// `link` builds the URL of a given page number; it is only called for
/// pages that exist. A page past the end yields no items, not an error.
pub fn paginate<I, F>(items: Vec<I>, request: &PageRequest, link: F) -> Page<I>
where
    F: Fn(u32) -> String,
{
    let page = request.page();
    let page_size = request.page_size();
    let total_count = items.len() as u64;
    let total_pages = total_count.div_ceil(u64::from(page_size));

    let previous_page_link = if page > 1 {
        link(page - 1)
    } else {
        String::new()
    };
    let next_page_link = if u64::from(page) < total_pages {
        link(page + 1)
    } else {
        String::new()
    };

    let items = items
        .into_iter()
        .skip(request.offset())
        .take(page_size as usize)
        .collect();

    Page {
        items,
        metadata: PaginationMetadata {
            current_page: page,
            page_size,
            total_count,
            total_pages,
            previous_page_link,
            next_page_link,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(page: u32) -> String {
        format!("/api/expensegroups?page={page}")
    }

    #[test]
    fn first_page_of_seven() {
        let request = PageRequest::new(1, 5, 10).unwrap();
        let page = paginate((1..=7).collect::<Vec<i32>>(), &request, link);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            page.metadata,
            PaginationMetadata {
                current_page: 1,
                page_size: 5,
                total_count: 7,
                total_pages: 2,
                previous_page_link: String::new(),
                next_page_link: link(2),
            }
        );
    }

    #[test]
    fn last_page_has_remainder_and_no_next() {
        let request = PageRequest::new(2, 5, 10).unwrap();
        let page = paginate((1..=7).collect::<Vec<i32>>(), &request, link);
        assert_eq!(page.items, vec![6, 7]);
        assert_eq!(page.metadata.previous_page_link, link(1));
        assert_eq!(page.metadata.next_page_link, "");
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let request = PageRequest::new(3, 5, 10).unwrap();
        let page = paginate((1..=7).collect::<Vec<i32>>(), &request, link);
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 2);
        assert_eq!(page.metadata.next_page_link, "");
        assert_eq!(page.metadata.previous_page_link, link(2));
    }

    #[test]
    fn empty_source() {
        let request = PageRequest::new(1, 5, 10).unwrap();
        let page = paginate(Vec::<i32>::new(), &request, link);
        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_count, 0);
        assert_eq!(page.metadata.total_pages, 0);
        assert_eq!(page.metadata.previous_page_link, "");
        assert_eq!(page.metadata.next_page_link, "");
    }

    #[test]
    fn page_size_is_clamped_silently() {
        let request = PageRequest::new(1, 50, 2).unwrap();
        assert_eq!(request.requested_page_size(), 50);
        let page = paginate((1..=5).collect::<Vec<i32>>(), &request, link);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.metadata.page_size, 2);
        assert_eq!(page.metadata.total_pages, 3);
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for total in 0..30_u64 {
            for size in 1..8_i64 {
                let request = PageRequest::new(1, size, 10).unwrap();
                let page = paginate(vec![(); total as usize], &request, link);
                let expected = (total as f64 / size as f64).ceil() as u64;
                assert_eq!(page.metadata.total_pages, expected, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn rejects_non_positive_input() {
        assert!(matches!(PageRequest::new(0, 5, 10), Err(EngineError::InvalidPage(_))));
        assert!(matches!(PageRequest::new(-1, 5, 10), Err(EngineError::InvalidPage(_))));
        assert!(matches!(PageRequest::new(1, 0, 10), Err(EngineError::InvalidPage(_))));
    }

    #[test]
    fn metadata_uses_header_keys() {
        let request = PageRequest::new(1, 5, 10).unwrap();
        let page = paginate((1..=7).collect::<Vec<i32>>(), &request, link);
        let header = serde_json::to_value(&page.metadata).unwrap();
        assert_eq!(
            header,
            serde_json::json!({
                "currentPage": 1,
                "pageSize": 5,
                "totalCount": 7,
                "totalPages": 2,
                "previousPageLink": "",
                "nextPageLink": "/api/expensegroups?page=2",
            })
        );
    }
}
