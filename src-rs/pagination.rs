use std::ops::Range;

pub const PAGE_SIZE: usize = 5;

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

pub fn page_window(page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1) * page_size;
    start..start + page_size
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let window = page_window(page, page_size);
    let start = window.start.min(items.len());
    let end = window.end.min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pages_rounding_up() {
        assert_eq!(page_count(0, PAGE_SIZE), 0);
        assert_eq!(page_count(1, PAGE_SIZE), 1);
        assert_eq!(page_count(5, PAGE_SIZE), 1);
        assert_eq!(page_count(7, PAGE_SIZE), 2);
        assert_eq!(page_count(10, PAGE_SIZE), 2);
        assert_eq!(page_count(11, PAGE_SIZE), 3);
    }

    #[test]
    fn windows_are_contiguous() {
        assert_eq!(page_window(1, PAGE_SIZE), 0..5);
        assert_eq!(page_window(2, PAGE_SIZE), 5..10);
        assert_eq!(page_window(4, PAGE_SIZE), 15..20);
    }

    #[test]
    fn slices_seven_items_into_two_pages() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(paginate(&items, 1, PAGE_SIZE), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 2, PAGE_SIZE), &[6, 7]);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let items: Vec<u32> = (1..=3).collect();
        assert!(paginate(&items, 2, PAGE_SIZE).is_empty());
        assert!(paginate(&items, 9, PAGE_SIZE).is_empty());
    }
}
