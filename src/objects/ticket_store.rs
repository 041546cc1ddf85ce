use super::{AppError, Ticket, TicketFeed};
use std::collections::HashSet;

/// Outcome of replacing the store contents with a fetched feed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<AppError>,
}

/// The ticket list as loaded from the feed. Written once, read on every render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Replaces the contents wholesale. Records violating an invariant, or
    /// repeating an id seen earlier in the feed, are left out.
    pub fn replace(&mut self, tickets: Vec<Ticket>) -> LoadReport {
        let mut ids = HashSet::new();
        let mut rejected = Vec::new();

        self.tickets = tickets
            .into_iter()
            .filter(|ticket| match ticket.validate() {
                Ok(_) if !ids.insert(ticket.id) => {
                    rejected.push(AppError::from(format!("ticket {}: duplicate id", ticket.id)));
                    false
                }
                Ok(_) => true,
                Err(e) => {
                    rejected.push(e);
                    false
                }
            })
            .collect();

        LoadReport {
            accepted: self.tickets.len(),
            rejected,
        }
    }

    /// Decodes every feed record and replaces the contents with the ones that
    /// decode and validate. Rejections are reported in feed order.
    pub fn load(&mut self, feed: TicketFeed) -> LoadReport {
        let mut rejected = Vec::new();
        let tickets = feed
            .decode()
            .into_iter()
            .filter_map(|record| match record {
                Ok(ticket) => Some(ticket),
                Err(e) => {
                    rejected.push(e);
                    None
                }
            })
            .collect();

        let mut report = self.replace(tickets);
        rejected.append(&mut report.rejected);
        report.rejected = rejected;
        report
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::ticket::tests::ticket;

    #[test]
    fn starts_empty() {
        assert!(TicketStore::default().is_empty());
    }

    #[test]
    fn replaces_contents_wholesale() {
        let mut store = TicketStore::default();

        store.replace(vec![ticket(1, 0, 100.0), ticket(2, 1, 200.0)]);
        let report = store.replace(vec![ticket(3, 2, 300.0)]);

        assert_eq!(report.accepted, 1);
        assert!(report.rejected.is_empty());
        assert_eq!(store.tickets().iter().map(|t| t.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn keeps_valid_records_next_to_undecodable_ones() {
        let valid = serde_json::to_value(ticket(1, 0, 100.0)).unwrap();
        let mut negative_stops = serde_json::to_value(ticket(2, 0, 100.0)).unwrap();
        negative_stops["stops"] = (-1).into();
        let mut too_many_stops = serde_json::to_value(ticket(3, 0, 100.0)).unwrap();
        too_many_stops["stops"] = 4.into();

        let mut store = TicketStore::default();
        let report = store.load(TicketFeed {
            tickets: vec![valid, negative_stops, too_many_stops],
        });

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected.len(), 2);
        assert!(report.rejected[0].description.starts_with("feed record 1:"));
        assert!(report.rejected[1].description.starts_with("ticket 3:"));
        assert_eq!(store.tickets().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn skips_invalid_and_duplicate_records() {
        let mut store = TicketStore::default();
        let mut bad_date = ticket(4, 0, 100.0);
        bad_date.departure_date = "32.01.25".into();

        let report = store.replace(vec![
            ticket(1, 0, 100.0),
            ticket(1, 2, 150.0),
            ticket(2, 5, 100.0),
            ticket(3, 1, -10.0),
            bad_date,
            ticket(5, 3, 500.0),
        ]);

        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected.len(), 4);
        assert_eq!(store.tickets().iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(store.tickets()[0].stops, 0);
    }
}
