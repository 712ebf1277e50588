pub mod borrowers;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod items;
pub mod utils;
