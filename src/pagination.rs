use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Number of page links shown around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Sort state flags carried by the page envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

impl SortState {
    pub fn new(sorted: bool) -> Self {
        Self {
            sorted,
            unsorted: !sorted,
            empty: !sorted,
        }
    }
}

/// Request-side pagination block echoed back in every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: usize,
    pub page_size: usize,
    pub sort: SortState,
    pub offset: usize,
    pub paged: bool,
    pub unpaged: bool,
}

/// One page of results with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Pageable,
    pub total_pages: usize,
    pub total_elements: usize,
    pub last: bool,
    pub size: usize,
    pub number: usize,
    pub sort: SortState,
    pub number_of_elements: usize,
    pub first: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    /// Builds the envelope for `content`, page `page` (0-based) of `size`
    /// items out of `total_elements`.
    pub fn new(
        content: Vec<T>,
        page: usize,
        size: usize,
        total_elements: usize,
        sorted: bool,
    ) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        let sort = SortState::new(sorted);
        let number_of_elements = content.len();

        Self {
            pageable: Pageable {
                page_number: page,
                page_size: size,
                sort,
                offset: page.saturating_mul(size),
                paged: true,
                unpaged: false,
            },
            total_pages,
            total_elements,
            last: page.saturating_add(1) >= total_pages,
            size,
            number: page,
            sort,
            number_of_elements,
            first: page == 0,
            empty: content.is_empty(),
            content,
        }
    }

    /// Converts the items while keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            last: self.last,
            size: self.size,
            number: self.number,
            sort: self.sort,
            number_of_elements: self.number_of_elements,
            first: self.first,
            empty: self.empty,
        }
    }
}

/// Up to `width` consecutive page indices around `current`.
///
/// The window starts two pages before `current` and is shifted left near the
/// end so that it stays full whenever `total_pages >= width`.
pub fn page_window(total_pages: usize, current: usize, width: usize) -> Vec<usize> {
    let mut start = current.saturating_sub(width / 2);
    let end = (start + width).min(total_pages);

    if end - start.min(end) < width {
        start = end.saturating_sub(width);
    }

    (start..end).collect()
}
