use super::Ticket;
use std::collections::BTreeSet;

pub const MAX_STOPS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopToggle {
    All,
    Stops(u8),
}

/// Set of stop counts a ticket must match to be listed.
///
/// Only values in `0..=MAX_STOPS` ever enter the set, so a full set is
/// exactly `{0, 1, 2, 3}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopFilter {
    selected: BTreeSet<u8>,
}

impl Default for StopFilter {
    fn default() -> Self {
        Self {
            selected: (0..=MAX_STOPS).collect(),
        }
    }
}

impl StopFilter {
    pub fn toggle(&mut self, toggle: StopToggle) {
        match toggle {
            StopToggle::All => *self = Self::default(),
            StopToggle::Stops(stops) if stops > MAX_STOPS => {
                log::warn!("ignoring toggle of unsupported stop count {}", stops);
            }
            StopToggle::Stops(stops) => {
                if !self.selected.remove(&stops) {
                    self.selected.insert(stops);
                }
            }
        }
    }

    pub fn is_selected(&self, stops: u8) -> bool {
        self.selected.contains(&stops)
    }

    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == MAX_STOPS as usize + 1
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.is_all_selected() || self.is_selected(ticket.stops)
    }

    pub fn selected(&self) -> impl Iterator<Item = u8> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(filter: &StopFilter) -> Vec<u8> {
        filter.selected().collect()
    }

    #[test]
    fn defaults_to_all_stops() {
        let filter = StopFilter::default();

        assert!(filter.is_all_selected());
        assert_eq!(selection(&filter), vec![0, 1, 2, 3]);
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut filter = StopFilter::default();
        filter.toggle(StopToggle::Stops(1));

        for stops in 0..=MAX_STOPS {
            let before = filter.clone();

            filter.toggle(StopToggle::Stops(stops));
            assert_ne!(filter, before);
            filter.toggle(StopToggle::Stops(stops));
            assert_eq!(filter, before);
        }
    }

    #[test]
    fn toggle_all_always_yields_full_set() {
        let mut filter = StopFilter::default();
        filter.toggle(StopToggle::Stops(0));
        filter.toggle(StopToggle::Stops(2));
        assert!(!filter.is_all_selected());

        filter.toggle(StopToggle::All);
        assert_eq!(filter, StopFilter::default());
        filter.toggle(StopToggle::All);
        assert_eq!(filter, StopFilter::default());
    }

    #[test]
    fn can_deselect_everything() {
        let mut filter = StopFilter::default();

        for stops in 0..=MAX_STOPS {
            filter.toggle(StopToggle::Stops(stops));
        }

        assert!(!filter.is_all_selected());
        assert_eq!(selection(&filter), Vec::<u8>::new());
    }

    #[test]
    fn ignores_out_of_range_stops() {
        let mut filter = StopFilter::default();
        filter.toggle(StopToggle::Stops(0));
        let before = filter.clone();

        filter.toggle(StopToggle::Stops(4));
        assert_eq!(filter, before);
        assert!(!filter.is_selected(4));
    }
}
