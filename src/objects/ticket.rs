use super::{AppError, CalendarDate, TimeOfDay, MAX_STOPS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub origin: String,
    pub origin_name: String,
    pub destination: String,
    pub destination_name: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub carrier: String,
    pub stops: u8,
    pub price: f64,
}

/// The feed document. Entries stay raw until `decode`, so a single bad
/// record does not fail the whole feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketFeed {
    pub tickets: Vec<serde_json::Value>,
}

impl TicketFeed {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn decode(self) -> Vec<Result<Ticket, AppError>> {
        self.tickets
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                serde_json::from_value::<Ticket>(value)
                    .map_err(|e| AppError::from(format!("feed record {}: {}", idx, e)))
            })
            .collect()
    }
}

impl Ticket {
    pub fn departure(&self) -> Result<(CalendarDate, TimeOfDay), AppError> {
        Ok((
            CalendarDate::parse(&self.departure_date)?,
            TimeOfDay::parse(&self.departure_time)?,
        ))
    }

    pub fn arrival(&self) -> Result<(CalendarDate, TimeOfDay), AppError> {
        Ok((
            CalendarDate::parse(&self.arrival_date)?,
            TimeOfDay::parse(&self.arrival_time)?,
        ))
    }

    pub fn logo_url(&self, logo_prefix: &str) -> String {
        format!("{}/{}.svg", logo_prefix.trim_end_matches('/'), self.carrier)
    }

    /// Checks the record-level invariants of a feed entry.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.stops > MAX_STOPS {
            return Err(format!("ticket {}: unsupported stop count {}", self.id, self.stops).into());
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("ticket {}: invalid price {}", self.id, self.price).into());
        }

        self.departure()
            .and_then(|_| self.arrival())
            .map(|_| ())
            .map_err(|e| format!("ticket {}: {}", self.id, e).into())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn ticket(id: u32, stops: u8, price: f64) -> Ticket {
        Ticket {
            id,
            origin: "VVO".into(),
            origin_name: "Владивосток".into(),
            destination: "TLV".into(),
            destination_name: "Тель-Авив".into(),
            departure_date: "12.05.18".into(),
            departure_time: "16:20".into(),
            arrival_date: "12.05.18".into(),
            arrival_time: "22:10".into(),
            carrier: "TK".into(),
            stops,
            price,
        }
    }

    #[test]
    fn parses_feed_with_snake_case_fields() {
        let feed = TicketFeed::from_json(
            r#"{"tickets": [{
                "id": 7,
                "origin": "VVO",
                "origin_name": "Владивосток",
                "destination": "TLV",
                "destination_name": "Тель-Авив",
                "departure_date": "12.05.18",
                "departure_time": "16:20",
                "arrival_date": "12.05.18",
                "arrival_time": "22:10",
                "carrier": "TK",
                "stops": 3,
                "price": 12400
            }]}"#,
        )
        .unwrap();
        let tickets: Vec<Ticket> = feed.decode().into_iter().map(Result::unwrap).collect();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].id, 7);
        assert_eq!(tickets[0].stops, 3);
        assert_eq!(tickets[0].price, 12400.0);
        assert_eq!(tickets[0].destination_name, "Тель-Авив");
    }

    #[test]
    fn decodes_each_record_on_its_own() {
        let mut good = serde_json::to_value(ticket(1, 0, 100.0)).unwrap();
        let mut negative_stops = good.clone();
        negative_stops["id"] = 2.into();
        negative_stops["stops"] = (-1).into();
        let mut string_price = good.clone();
        string_price["id"] = 3.into();
        string_price["price"] = "100".into();
        let missing_field = serde_json::json!({ "id": 4 });
        good["id"] = 5.into();

        let records = TicketFeed {
            tickets: vec![negative_stops, string_price, missing_field, good],
        }
        .decode();

        assert_eq!(records.len(), 4);
        assert!(records[0].as_ref().unwrap_err().description.starts_with("feed record 0:"));
        assert!(records[1].is_err());
        assert!(records[2].is_err());
        assert_eq!(records[3].as_ref().unwrap().id, 5);
    }

    #[test]
    fn rejects_feed_without_ticket_list() {
        assert!(TicketFeed::from_json(r#"{"flights": []}"#).is_err());
        assert!(TicketFeed::from_json("not json").is_err());
    }

    #[test]
    fn resolves_logo_by_carrier() {
        let ticket = ticket(1, 0, 100.0);

        assert_eq!(ticket.logo_url("/logos"), "/logos/TK.svg");
        assert_eq!(ticket.logo_url("/static/logos/"), "/static/logos/TK.svg");
    }

    #[test]
    fn validates_record_invariants() {
        assert!(ticket(1, 0, 0.0).validate().is_ok());
        assert!(ticket(1, 3, 12400.0).validate().is_ok());
        assert!(ticket(1, 4, 100.0).validate().is_err());
        assert!(ticket(1, 0, -1.0).validate().is_err());
        assert!(ticket(1, 0, f64::NAN).validate().is_err());

        let mut bad_date = ticket(2, 1, 100.0);
        bad_date.arrival_date = "2018-05-12".into();
        let err = bad_date.validate().unwrap_err();
        assert!(err.description.starts_with("ticket 2:"));

        let mut bad_time = ticket(3, 1, 100.0);
        bad_time.departure_time = "25:00".into();
        assert!(bad_time.validate().is_err());
    }
}
