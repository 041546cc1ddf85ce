mod tickets_page;
pub use tickets_page::TicketsPage;
