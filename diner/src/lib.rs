//! Client-side core of the restaurant ordering app: typed access to the menu
//! backend, the in-progress order, and the "order almost ready" reminder.

pub mod api;
pub mod notify;
pub mod order;

pub use api::{MenuClient, MenuClientError};
pub use notify::{LogNotifier, Notifier, Reminder, ReminderScheduler};
pub use order::{Order, OrderStore, SubscriptionId};
