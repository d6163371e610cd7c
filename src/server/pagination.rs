use serde::Deserialize;

use super::error::ApiError;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `?page=N` query parameter, 1-indexed, defaulting to page 1.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery { page: default_page() }
    }
}

/// Slices one fixed-size page out of an already-fetched list. A page past
/// the end yields an empty vec; page zero is rejected since pages are
/// 1-indexed.
pub fn paginate<T: Clone>(items: &[T], page: PageQuery) -> Result<Vec<T>, ApiError> {
    if page.page == 0 {
        return Err(ApiError::BadRequest);
    }
    let start = (page.page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    Ok(items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageQuery {
        PageQuery { page: n }
    }

    #[test]
    fn first_page_holds_at_most_ten_items() {
        let items: Vec<i64> = (0..25).collect();
        let slice = paginate(&items, page(1)).unwrap();
        assert_eq!(slice, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let items: Vec<i64> = (0..25).collect();
        let slice = paginate(&items, page(3)).unwrap();
        assert_eq!(slice, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items: Vec<i64> = (0..5).collect();
        assert!(paginate(&items, page(2)).unwrap().is_empty());
        assert!(paginate(&items, page(1000)).unwrap().is_empty());
    }

    #[test]
    fn page_zero_is_rejected() {
        let items: Vec<i64> = (0..5).collect();
        assert_eq!(paginate(&items, page(0)), Err(ApiError::BadRequest));
    }

    #[test]
    fn default_page_is_one() {
        let items: Vec<i64> = (0..15).collect();
        let slice = paginate(&items, PageQuery::default()).unwrap();
        assert_eq!(slice.len(), 10);
        assert_eq!(slice[0], 0);
    }
}
