//! API service modules for Mercury endpoints.
//!
//! Each service provides methods for interacting with a specific
//! subset of the Mercury API.

mod accounts;
mod categories;
mod customers;
mod events;
mod invoices;
mod organization;
mod safes;
mod send_money;
mod transactions;
mod treasury;
mod users;

pub use accounts::AccountsService;
pub use categories::CategoriesService;
pub use customers::CustomersService;
pub use events::EventsService;
pub use invoices::InvoicesService;
pub use organization::OrganizationService;
pub use safes::SafesService;
pub use send_money::SendMoneyService;
pub use transactions::{TransactionFilter, TransactionQuery, TransactionsService};
pub use treasury::TreasuryService;
pub use users::UsersService;
