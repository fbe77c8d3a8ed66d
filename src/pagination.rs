//! Page range computation for pagination controls.
//!
//! A pagination control shows the first pages, a small window around the
//! current page and the last pages. Runs of pages in between are collapsed
//! into ellipsis groups that a template can render as an expandable "…"
//! dropdown listing the hidden pages.

use std::convert::Infallible;

use serde::Serialize;

/// Items shown per page when a request does not specify a page size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Pages shown before a leading ellipsis.
pub const LINKS_BEFORE_ELLIPSIS: usize = 1;
/// Pages shown immediately before the current page.
pub const LINKS_BEFORE_CURRENT: usize = 1;
/// Pages shown immediately after the current page.
pub const LINKS_AFTER_CURRENT: usize = 1;
/// Pages shown after a trailing ellipsis.
pub const LINKS_AFTER_ELLIPSIS: usize = 1;
/// Page budget of a collapsed control: the current page, two slots reserved
/// for ellipsis groups and the configured links around them.
pub const TOTAL_LINKS: usize = 1
    + 2
    + LINKS_BEFORE_ELLIPSIS
    + LINKS_BEFORE_CURRENT
    + LINKS_AFTER_CURRENT
    + LINKS_AFTER_ELLIPSIS;
/// Maximum number of pages listed under a single ellipsis group.
pub const MAX_LINKS_UNDER_ELLIPSIS: usize = 50;

/// A single clickable page number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub index: usize,
    pub current: bool,
    pub path: String,
}

/// A collapsed run of pages rendered as an expandable ellipsis.
///
/// `start..=end` is the listed range; `pages` holds one resolved link per
/// page in that range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EllipsisGroup {
    pub start: usize,
    pub end: usize,
    pub pages: Vec<PageLink>,
}

/// One entry of a pagination control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageEntry {
    Link(PageLink),
    Ellipsis(EllipsisGroup),
}

impl PageEntry {
    /// Returns every page link carried by this entry, in order.
    pub fn links(&self) -> &[PageLink] {
        match self {
            PageEntry::Link(link) => std::slice::from_ref(link),
            PageEntry::Ellipsis(group) => &group.pages,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageEntry::Ellipsis(_))
    }
}

/// Layout step produced before any URL is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Page(usize),
    Gap { start: usize, end: usize },
}

/// Pushes the hidden run `start..=end`: nothing when empty, a plain page for
/// a single page, an ellipsis otherwise.
fn push_gap(slots: &mut Vec<Slot>, start: usize, end: usize) {
    if end < start {
        return;
    }
    if start == end {
        slots.push(Slot::Page(start));
        return;
    }
    let end = end.min(start + MAX_LINKS_UNDER_ELLIPSIS - 1);
    slots.push(Slot::Gap { start, end });
}

/// Computes the entries of a pagination control for one page of a listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRangeCalculator {
    current_page: usize,
    total_pages: usize,
}

impl PageRangeCalculator {
    /// Creates a calculator, clamping `current_page` into `1..=total_pages`.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let clamped = current_page.clamp(1, total_pages.max(1));
        if clamped != current_page {
            log::debug!(
                "Clamped current page {current_page} into 1..={total_pages} as {clamped}"
            );
        }

        Self {
            current_page: clamped,
            total_pages,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Computes the entries, resolving each displayed page through
    /// `url_for_page` exactly once.
    pub fn compute<F>(&self, mut url_for_page: F) -> Vec<PageEntry>
    where
        F: FnMut(usize) -> String,
    {
        match self.try_compute(|page| Ok::<_, Infallible>(url_for_page(page))) {
            Ok(entries) => entries,
            Err(never) => match never {},
        }
    }

    /// Same as [`compute`](Self::compute) but stops at the first error
    /// returned by `url_for_page`.
    pub fn try_compute<F, E>(&self, mut url_for_page: F) -> Result<Vec<PageEntry>, E>
    where
        F: FnMut(usize) -> Result<String, E>,
    {
        let mut link = |index: usize| -> Result<PageLink, E> {
            Ok(PageLink {
                index,
                current: false,
                path: url_for_page(index)?,
            })
        };

        let mut entries = Vec::new();
        for slot in self.layout() {
            let entry = match slot {
                Slot::Page(index) => {
                    let mut page = link(index)?;
                    page.current = index == self.current_page;
                    PageEntry::Link(page)
                }
                Slot::Gap { start, end } => PageEntry::Ellipsis(EllipsisGroup {
                    start,
                    end,
                    pages: (start..=end).map(&mut link).collect::<Result<_, E>>()?,
                }),
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    fn layout(&self) -> Vec<Slot> {
        let total = self.total_pages;
        let current = self.current_page;

        if total == 0 {
            return vec![];
        }

        let from = current.saturating_sub(LINKS_BEFORE_CURRENT).max(1);

        // Near the end there is nothing to collapse after the window, so the
        // spare links move in front of the leading ellipsis.
        let delta = if total - current <= LINKS_AFTER_ELLIPSIS + LINKS_BEFORE_CURRENT {
            (LINKS_BEFORE_ELLIPSIS + current + LINKS_AFTER_CURRENT + LINKS_BEFORE_ELLIPSIS)
                .saturating_sub(total)
        } else {
            0
        };

        let max_links = LINKS_BEFORE_ELLIPSIS + delta;
        let initial_links = from
            .saturating_sub(LINKS_BEFORE_ELLIPSIS + 1)
            .min(max_links);

        let mut slots: Vec<Slot> = (1..=initial_links).map(Slot::Page).collect();
        push_gap(&mut slots, initial_links + 1, from - 1);

        let to_part1 = (from + LINKS_AFTER_CURRENT + LINKS_BEFORE_CURRENT).min(total);
        slots.extend((from..=to_part1).map(Slot::Page));

        if total > to_part1 {
            // Only plain page links count here; a collapsed group does not.
            let shown = slots
                .iter()
                .filter(|slot| matches!(slot, Slot::Page(_)))
                .count();
            let final_links = TOTAL_LINKS
                .saturating_sub(shown + 1)
                .max(LINKS_AFTER_ELLIPSIS);
            let from_part2 = (total + 1).saturating_sub(final_links).max(to_part1 + 1);

            push_gap(&mut slots, to_part1 + 1, from_part2 - 1);
            slots.extend((from_part2..=total).map(Slot::Page));
        }

        slots
    }
}

/// Computes pagination entries for `current_page` out of `total_pages`.
pub fn compute_pages<F>(current_page: usize, total_pages: usize, url_for_page: F) -> Vec<PageEntry>
where
    F: FnMut(usize) -> String,
{
    PageRangeCalculator::new(current_page, total_pages).compute(url_for_page)
}

/// A page of items together with the pagination control describing it.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageEntry>,
    pub page: usize,
    pub total_pages: usize,
    pub previous_path: Option<String>,
    pub next_path: Option<String>,
}

impl<T> Paginated<T> {
    pub fn new<F>(items: Vec<T>, current_page: usize, total_pages: usize, url_for_page: F) -> Self
    where
        F: FnMut(usize) -> String,
    {
        let calculator = PageRangeCalculator::new(current_page, total_pages);
        let pages = calculator.compute(url_for_page);
        Self::from_entries(items, calculator, pages)
    }

    pub fn try_new<F, E>(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        url_for_page: F,
    ) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<String, E>,
    {
        let calculator = PageRangeCalculator::new(current_page, total_pages);
        let pages = calculator.try_compute(url_for_page)?;
        Ok(Self::from_entries(items, calculator, pages))
    }

    fn from_entries(items: Vec<T>, calculator: PageRangeCalculator, pages: Vec<PageEntry>) -> Self {
        let page = calculator.current_page();
        // The window around the current page always holds its neighbours as
        // top-level links, so their paths are already resolved.
        let path_of = |index: usize| {
            pages.iter().find_map(|entry| match entry {
                PageEntry::Link(link) if link.index == index => Some(link.path.clone()),
                _ => None,
            })
        };
        let previous_path = page.checked_sub(1).filter(|&p| p >= 1).and_then(&path_of);
        let next_path = Some(page + 1)
            .filter(|&p| p <= calculator.total_pages())
            .and_then(&path_of);

        Self {
            items,
            page,
            total_pages: calculator.total_pages(),
            previous_path,
            next_path,
            pages,
        }
    }
}
