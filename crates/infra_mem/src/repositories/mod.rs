//! Repository adapters, one per aggregate

mod invoice;
mod meter;
mod rates;
mod room;

pub use invoice::InMemoryInvoiceStore;
pub use meter::InMemoryMeterReadingStore;
pub use rates::InMemoryRateProvider;
pub use room::InMemoryRoomDirectory;
