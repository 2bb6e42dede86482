/// Open/closed state of the mobile navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Disclosure {
    Open,
    #[default]
    Closed,
}

impl Disclosure {
    pub fn is_open(self) -> bool {
        self == Disclosure::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Disclosure::Open => Disclosure::Closed,
            Disclosure::Closed => Disclosure::Open,
        };
    }

    /// Link and backdrop clicks always land here.
    pub fn close(&mut self) {
        *self = Disclosure::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [Disclosure::Open, Disclosure::Closed] {
            let mut state = start;
            state.toggle();
            assert_ne!(state, start);
            state.toggle();
            assert_eq!(state, start);
        }
    }

    #[test]
    fn test_close_forces_closed() {
        let mut state = Disclosure::default();
        assert!(!state.is_open());

        state.toggle();
        assert!(state.is_open());

        state.close();
        assert_eq!(state, Disclosure::Closed);
        state.close();
        assert_eq!(state, Disclosure::Closed);
    }
}
