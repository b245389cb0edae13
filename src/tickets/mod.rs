pub mod ticket_book;
pub mod ticket_minter;

pub use ticket_book::TicketBook;
