use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Page envelope returned by list endpoints.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };
        let per_page = per_page.max(1);

        Self {
            items,
            page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_to_one() {
        let paginated = Paginated::new(vec![1, 2, 3], 0, 3, 25);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.total_pages, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 2, 51, 25);
        assert_eq!(paginated.total_pages, 3);
        assert_eq!(paginated.total, 51);
    }

    #[test]
    fn test_empty_result_has_no_pages() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0, 25);
        assert_eq!(paginated.total_pages, 0);
    }
}
