//! Request handlers, one module per resource

pub mod health;
pub mod time_entries;
pub mod expense_entries;
pub mod claims;
pub mod reference;
pub mod vendors;
pub mod referrals;
pub mod invoices;
pub mod assure;
pub mod servicenow;
