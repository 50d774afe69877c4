// File: src/pagination.rs
// Purpose: View state for pagination controls

use serde::Serialize;

/// Previous-page link. Disabled with no href on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Previous {
    pub href: Option<String>,
    pub disabled: bool,
}

/// Next-page link. Disabled with no href on the last page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Next {
    pub href: Option<String>,
    pub disabled: bool,
}

/// One numbered page link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub href: String,
    pub current: bool,
}

/// Pagination view state: previous/next controls plus one link per page.
///
/// Computed per request from fresh inputs; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    previous: Previous,
    next: Next,
    pages: Vec<PageLink>,
}

impl Pagination {
    /// Computes pagination state for `total_items` items split into pages
    /// of `page_size` (must be positive), with `current_index` as the
    /// zero-based current page.
    ///
    /// `link` maps a page index to its href. `current_index` is not bounds
    /// checked; an out-of-range index yields no current page.
    pub fn create(
        current_index: usize,
        page_size: usize,
        total_items: usize,
        link: impl Fn(usize) -> String,
    ) -> Pagination {
        let page_count = total_items / page_size + usize::from(total_items % page_size != 0);

        Pagination {
            previous: Previous::create(current_index, &link),
            next: Next::create(current_index, page_count, &link),
            pages: PageLink::create_pages(current_index, page_count, &link),
        }
    }

    pub fn previous(&self) -> &Previous {
        &self.previous
    }

    pub fn next(&self) -> &Next {
        &self.next
    }

    pub fn pages(&self) -> &[PageLink] {
        &self.pages
    }
}

impl Previous {
    fn create(current_index: usize, link: &impl Fn(usize) -> String) -> Previous {
        if current_index == 0 {
            return Previous {
                href: None,
                disabled: true,
            };
        }
        Previous {
            href: Some(link(current_index - 1)),
            disabled: false,
        }
    }
}

impl Next {
    fn create(current_index: usize, page_count: usize, link: &impl Fn(usize) -> String) -> Next {
        let next_page = current_index + 1;
        if next_page == page_count {
            return Next {
                href: None,
                disabled: true,
            };
        }
        Next {
            href: Some(link(next_page)),
            disabled: false,
        }
    }
}

impl PageLink {
    fn create_pages(
        current_index: usize,
        page_count: usize,
        link: &impl Fn(usize) -> String,
    ) -> Vec<PageLink> {
        (0..page_count)
            .map(|index| PageLink {
                href: link(index),
                current: index == current_index,
            })
            .collect()
    }
}
