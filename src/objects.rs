mod app_error;
pub use app_error::AppError;
mod calendar_date;
pub use calendar_date::{CalendarDate, TimeOfDay};
mod currency;
pub use currency::{format_amount, Currency, CurrencyRates};
mod stop_filter;
pub use stop_filter::{StopFilter, StopToggle, MAX_STOPS};
pub mod ticket;
pub use ticket::{Ticket, TicketFeed};
mod ticket_store;
pub use ticket_store::{LoadReport, TicketStore};
mod view_config;
pub use view_config::ViewConfig;
