//! Detail Selector
//!
//! `Closed | Open(item)` state behind a detail modal.

/// Where a click inside an open modal landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the panel
    Backdrop,
    /// The detail panel itself
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Closed,
    Open(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::Closed
    }
}

impl<T> Selection<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Open(item) => Some(item),
            Selection::Closed => None,
        }
    }

    /// Opens `item`, replacing whatever was open before.
    pub fn select(&mut self, item: T) {
        *self = Selection::Open(item);
    }

    pub fn close(&mut self) {
        *self = Selection::Closed;
    }

    /// Returns true when the click changed the state.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        match (target, self.is_open()) {
            (ClickTarget::Backdrop, true) => {
                self.close();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CERTIFICATIONS;
    use crate::models::Certification;

    fn cert(title: &str) -> Certification {
        *CERTIFICATIONS
            .items
            .iter()
            .find(|c| c.title == title)
            .unwrap()
    }

    #[test]
    fn test_starts_closed() {
        let selection = Selection::<Certification>::default();
        assert_eq!(selection, Selection::Closed);
        assert!(selection.current().is_none());
    }

    #[test]
    fn test_select_then_backdrop_closes() {
        let mut selection = Selection::default();
        selection.select(cert("CompTIA Security+"));

        assert_eq!(selection.current().map(|c| c.title), Some("CompTIA Security+"));
        assert_eq!(selection.current().map(|c| c.issuer), Some("CompTIA"));

        assert!(selection.click(ClickTarget::Backdrop));
        assert_eq!(selection, Selection::Closed);
    }

    #[test]
    fn test_panel_click_never_closes() {
        let mut selection = Selection::default();
        selection.select(cert("Certified Ethical Hacker (CEH)"));

        assert!(!selection.click(ClickTarget::Panel));
        assert!(selection.is_open());
    }

    #[test]
    fn test_selecting_same_item_twice_stays_open() {
        let ceh = cert("Certified Ethical Hacker (CEH)");
        let mut selection = Selection::default();
        selection.select(ceh);
        selection.select(ceh);
        assert_eq!(selection, Selection::Open(ceh));
    }

    #[test]
    fn test_switches_directly_between_items() {
        let mut selection = Selection::default();
        selection.select(cert("CompTIA Security+"));
        selection.select(cert("Certified Ethical Hacker (CEH)"));
        assert_eq!(
            selection.current().map(|c| c.title),
            Some("Certified Ethical Hacker (CEH)")
        );

        selection.close();
        assert!(!selection.is_open());
        // Backdrop on a closed selector is a no-op
        assert!(!selection.click(ClickTarget::Backdrop));
    }
}
