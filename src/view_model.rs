//! Pure derivation of what the ticket page displays from the loaded tickets,
//! the stop filter and the selected currency.

use crate::objects::{
    AppError, Currency, CurrencyRates, LoadReport, StopFilter, StopToggle, Ticket, TicketFeed,
    TicketStore, ViewConfig,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub code: String,
    pub name: String,
    pub time: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketView {
    pub id: u32,
    pub carrier: String,
    pub logo_url: String,
    pub price: String,
    pub stops: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
}

pub fn stops_label(stops: u8) -> String {
    if stops == 0 {
        return "Без пересадок".into();
    }

    let word = match (stops % 10, stops % 100) {
        (1, n) if n != 11 => "пересадка",
        (2..=4, n) if !(12..=14).contains(&n) => "пересадки",
        _ => "пересадок",
    };

    format!("{} {}", stops, word)
}

pub fn filter_tickets<'a>(
    tickets: &'a [Ticket],
    filter: &'a StopFilter,
) -> impl Iterator<Item = &'a Ticket> + 'a {
    tickets.iter().filter(move |ticket| filter.matches(ticket))
}

pub fn ticket_view(
    ticket: &Ticket,
    currency: Currency,
    rates: &CurrencyRates,
    logo_prefix: &str,
) -> Result<TicketView, AppError> {
    let (departure_date, departure_time) = ticket.departure()?;
    let (arrival_date, arrival_time) = ticket.arrival()?;

    Ok(TicketView {
        id: ticket.id,
        carrier: ticket.carrier.clone(),
        logo_url: ticket.logo_url(logo_prefix),
        price: rates.format(ticket.price, currency)?,
        stops: stops_label(ticket.stops),
        departure: Endpoint {
            code: ticket.origin.clone(),
            name: ticket.origin_name.clone(),
            time: departure_time.format(),
            date: departure_date.format(),
        },
        arrival: Endpoint {
            code: ticket.destination.clone(),
            name: ticket.destination_name.clone(),
            time: arrival_time.format(),
            date: arrival_date.format(),
        },
    })
}

pub fn derive_ticket_views(
    tickets: &[Ticket],
    filter: &StopFilter,
    currency: Currency,
    rates: &CurrencyRates,
    logo_prefix: &str,
) -> Result<Vec<TicketView>, AppError> {
    filter_tickets(tickets, filter)
        .map(|ticket| ticket_view(ticket, currency, rates, logo_prefix))
        .collect()
}

/// State behind the ticket page: the store, both selections and the views
/// derived from them.
#[derive(Debug, Clone, Default)]
pub struct TicketListState {
    store: Option<TicketStore>,
    filter: StopFilter,
    currency: Currency,
    views: Vec<TicketView>,
    error: Option<AppError>,
}

impl TicketListState {
    pub fn is_loading(&self) -> bool {
        self.store.is_none()
    }

    pub fn filter(&self) -> &StopFilter {
        &self.filter
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn views(&self) -> &[TicketView] {
        &self.views
    }

    pub fn load(&mut self, feed: TicketFeed) -> LoadReport {
        let mut store = TicketStore::default();
        let report = store.load(feed);

        self.store = Some(store);
        report
    }

    /// Marks loading as finished with nothing to show.
    pub fn load_failed(&mut self) {
        self.store = Some(TicketStore::default());
    }

    pub fn toggle_stop(&mut self, toggle: StopToggle) {
        self.filter.toggle(toggle);
    }

    /// Returns false when `currency` is already selected.
    pub fn set_currency(&mut self, currency: Currency) -> bool {
        if currency == self.currency {
            return false;
        }
        self.currency = currency;
        true
    }

    /// Recomputes the views. A derivation error is returned only when it
    /// differs from the one the previous refresh ran into.
    pub fn refresh(&mut self, config: &ViewConfig) -> Option<AppError> {
        let tickets = self
            .store
            .as_ref()
            .map(|store| store.tickets())
            .unwrap_or_default();

        match derive_ticket_views(
            tickets,
            &self.filter,
            self.currency,
            &config.rates,
            &config.logo_prefix,
        ) {
            Ok(views) => {
                self.views = views;
                self.error = None;
                None
            }
            Err(e) => {
                self.views = Vec::new();
                match self.error.as_ref() == Some(&e) {
                    true => None,
                    false => {
                        self.error = Some(e.clone());
                        Some(e)
                    }
                }
            }
        }
    }
}
