//! Guest wishes shown on the page.

use crate::content::Wish;

/// Wishes submitted during this visit, newest first, followed by the seeds.
///
/// Lives only as long as the page view. No validation, no dedup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishBook {
    submitted: Vec<Wish>,
    seeds: Vec<Wish>,
}

impl WishBook {
    /// A book holding only the seed wishes.
    pub fn new(seeds: Vec<Wish>) -> Self {
        Self {
            submitted: Vec::new(),
            seeds,
        }
    }

    /// Put `wish` at the front of the list.
    pub fn add(&mut self, wish: Wish) {
        self.submitted.insert(0, wish);
    }

    /// All wishes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Wish> {
        self.submitted.iter().chain(self.seeds.iter())
    }

    /// Owned copy of the display order.
    pub fn to_vec(&self) -> Vec<Wish> {
        self.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.submitted.len() + self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeds() -> Vec<Wish> {
        vec![
            Wish::new("Amanda & Budi", "Semoga bahagia").with_date("15 Januari 2025"),
            Wish::new("Om Hendra", "Selamat").with_date("10 Januari 2025"),
        ]
    }

    #[test]
    fn test_new_book_shows_seeds() {
        let book = WishBook::new(seeds());
        assert_eq!(book.len(), 2);
        assert_eq!(book.to_vec(), seeds());
    }

    #[test]
    fn test_add_prepends_exactly_one() {
        let mut book = WishBook::new(seeds());
        book.add(Wish::new("Dewi", "Bahagia selalu"));

        assert_eq!(book.len(), 3);
        let first = book.iter().next().expect("first wish");
        assert_eq!(first.name, "Dewi");
        assert_eq!(first.message, "Bahagia selalu");
    }

    #[test]
    fn test_newest_submission_first() {
        let mut book = WishBook::new(seeds());
        book.add(Wish::new("First", "one"));
        book.add(Wish::new("Second", "two"));

        let names: Vec<_> = book.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Second", "First", "Amanda & Budi", "Om Hendra"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut book = WishBook::default();
        book.add(Wish::new("Dewi", "Selamat"));
        book.add(Wish::new("Dewi", "Selamat"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_empty_book() {
        assert!(WishBook::default().is_empty());
    }
}
