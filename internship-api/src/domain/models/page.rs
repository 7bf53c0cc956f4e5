use super::Internship;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Parses a raw `page` query value.
    ///
    /// The leading integer is taken (`"3abc"` is page 3). Missing, unparsable
    /// and non-positive values all become the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::FIRST;
        };

        let (negative, digits) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        match digits[..end].parse::<u64>() {
            Ok(page) if !negative && page >= 1 => Self(page),
            _ => Self::FIRST,
        }
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Skip/limit window over the store's iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub skip: u64,
    pub limit: Option<u64>,
}

impl Window {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn first(limit: u64) -> Self {
        Self {
            skip: 0,
            limit: Some(limit),
        }
    }

    pub fn page(page: PageNumber, size: u64) -> Self {
        Self {
            skip: (page.get() - 1).saturating_mul(size),
            limit: Some(size),
        }
    }
}

/// One page of internships plus totals over the whole collection.
#[derive(Debug, Clone)]
pub struct Page {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub internships: Vec<Internship>,
}

impl Page {
    pub fn new(total_items: u64, size: u64, current: PageNumber, items: Vec<Internship>) -> Self {
        Self {
            total_items,
            total_pages: total_items.div_ceil(size.max(1)),
            current_page: current.get(),
            internships: items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbage_page_is_first() {
        assert_eq!(PageNumber::parse(None), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("abc")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("")), PageNumber::FIRST);
    }

    #[test]
    fn non_positive_page_is_first() {
        assert_eq!(PageNumber::parse(Some("0")), PageNumber::FIRST);
        assert_eq!(PageNumber::parse(Some("-4")), PageNumber::FIRST);
    }

    #[test]
    fn leading_integer_is_used() {
        assert_eq!(PageNumber::parse(Some("3")).get(), 3);
        assert_eq!(PageNumber::parse(Some("3abc")).get(), 3);
        assert_eq!(PageNumber::parse(Some(" +2 ")).get(), 2);
    }

    #[test]
    fn window_skips_previous_pages() {
        let window = Window::page(PageNumber::parse(Some("3")), 20);
        assert_eq!(window.skip, 40);
        assert_eq!(window.limit, Some(20));
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(45, 20, PageNumber::FIRST, vec![]);
        assert_eq!(page.total_pages, 3);

        let empty = Page::new(0, 20, PageNumber::FIRST, vec![]);
        assert_eq!(empty.total_pages, 0);
    }
}
