use serde::{Serialize, Serializer};

/// One slice of a paginated collection.
///
/// `current_page` and `total_pages` are both at least 1; an empty source
/// collection yields a single empty page rather than zero pages.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub current_page: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}

/// Entry in a compressed page-number range: either a real page number or a
/// placeholder for omitted pages between the window and the first/last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRangeEntry {
    Page(u64),
    Ellipsis,
}

impl Serialize for PageRangeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(n) => serializer.serialize_u64(*n),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Parse a user-supplied page parameter. Malformed, negative, or zero input
/// falls back to page 1 instead of failing the request.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// Total page count for a collection: `ceil(total_items / page_size)`,
/// minimum 1.
pub fn total_pages(total_items: u64, page_size: u64) -> u64 {
    let page_size = page_size.max(1);
    total_items.div_ceil(page_size).max(1)
}

/// Slice the page `requested_page` out of `items`. Out-of-range requests are
/// clamped into `1..=total_pages`.
pub fn paginate<T>(items: Vec<T>, page_size: u64, requested_page: u64) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len() as u64, page_size);
    let current_page = requested_page.clamp(1, total_pages);
    let offset = (current_page - 1) * page_size;
    let items = items
        .into_iter()
        .skip(offset as usize)
        .take(page_size as usize)
        .collect();
    Page {
        current_page,
        total_pages,
        items,
    }
}

/// Compressed list of page numbers to display around `current_page`.
///
/// The window spans the current page ±2, clamped to the valid range. An
/// ellipsis is inserted on either side only when at least two pages would
/// otherwise be hidden there; the first and last page are always present.
pub fn page_range(current_page: u64, total_pages: u64) -> Vec<PageRangeEntry> {
    let total_pages = total_pages.max(1);
    let current_page = current_page.clamp(1, total_pages);

    let first = current_page.saturating_sub(2).max(1);
    let last = (current_page + 2).min(total_pages);
    let mut range: Vec<PageRangeEntry> = (first..=last).map(PageRangeEntry::Page).collect();

    if first - 1 >= 2 {
        range.insert(0, PageRangeEntry::Ellipsis);
    }
    if total_pages - last >= 2 {
        range.push(PageRangeEntry::Ellipsis);
    }
    if first != 1 {
        range.insert(0, PageRangeEntry::Page(1));
    }
    if last != total_pages {
        range.push(PageRangeEntry::Page(total_pages));
    }
    range
}

#[cfg(test)]
mod tests {
    use super::{page_range, paginate, parse_page, total_pages};
    use super::PageRangeEntry::{Ellipsis, Page};

    #[test]
    fn total_pages_rounds_up_and_floors_at_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(23, 10), 3);
    }

    #[test]
    fn paginate_clamps_out_of_range_requests() {
        let items: Vec<u32> = (0..23).collect();
        let page = paginate(items.clone(), 10, 99);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![20, 21, 22]);

        let page = paginate(items, 10, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn paginate_empty_collection_yields_single_empty_page() {
        let page = paginate(Vec::<u32>::new(), 10, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn paginate_middle_page_slices_at_offset() {
        let items: Vec<u32> = (0..23).collect();
        let page = paginate(items, 10, 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, (10..20).collect::<Vec<u32>>());
    }

    #[test]
    fn parse_page_soft_fails_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("-3")), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some(" 7 ")), 7);
    }

    #[test]
    fn range_first_page_of_ten() {
        assert_eq!(
            page_range(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn range_middle_page_near_end() {
        // Window is [5..9]; the gap to 10 is only 1, so 10 is appended
        // without a trailing ellipsis.
        assert_eq!(
            page_range(7, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10)
            ]
        );
    }

    #[test]
    fn range_single_page() {
        assert_eq!(page_range(1, 1), vec![Page(1)]);
    }

    #[test]
    fn range_two_sided_ellipsis() {
        assert_eq!(
            page_range(10, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn range_last_page_has_no_trailing_ellipsis() {
        assert_eq!(
            page_range(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn range_is_numeric_entries_monotonic() {
        for total in 1..=30u64 {
            for current in 1..=total {
                let numeric: Vec<u64> = page_range(current, total)
                    .into_iter()
                    .filter_map(|entry| match entry {
                        Page(n) => Some(n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(numeric.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(numeric.first(), Some(&1));
                assert_eq!(numeric.last(), Some(&total));
                assert!(numeric.contains(&current));
            }
        }
    }

    #[test]
    fn range_serializes_numbers_and_ellipsis_marker() {
        let json = serde_json::to_string(&page_range(1, 10)).expect("serialize");
        assert_eq!(json, r#"[1,2,3,"...",10]"#);
    }
}
