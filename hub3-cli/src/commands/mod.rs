pub mod amount;
pub mod codes;
pub mod encode;
pub mod iban;
pub mod invoice;
pub mod oib;
pub mod validate;
