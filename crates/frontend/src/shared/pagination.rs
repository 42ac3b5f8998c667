/// One page of a client-side paginated list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Clamped, 0-indexed
    pub page: usize,
    /// Never less than 1
    pub total_pages: usize,
    pub total_count: usize,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total_count.div_ceil(page_size).max(1)
}

/// Slices `items` for `page`; out-of-range pages clamp to the last one
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.min(total_pages - 1);
    let start = page * page_size;
    let end = (start + page_size).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        total_pages,
        total_count: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_one_page() {
        let page = paginate::<u32>(&[], 3, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..23).collect();
        let page = paginate(&items, 2, 10);
        assert_eq!(page.items, vec![20, 21, 22]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_count, 23);
    }

    #[test]
    fn test_page_clamped_after_shrink() {
        let items: Vec<u32> = (0..11).collect();
        let page = paginate(&items, 5, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![10]);
    }
}
