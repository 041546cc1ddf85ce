mod currency_switch;
pub use currency_switch::CurrencySwitch;
mod notification;
pub use notification::Notification;
mod stop_filter_panel;
pub use stop_filter_panel::StopFilterPanel;
mod ticket_card;
pub use ticket_card::TicketCard;
mod ticket_list;
pub use ticket_list::TicketList;
mod top;
pub use top::Top;
