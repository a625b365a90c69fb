pub mod clock;
pub mod error;
pub mod mem_storage;
pub mod storage;


pub use clock::{Clock, SystemClock};
pub use error::{Result, StoreError};
pub use mem_storage::MemStorage;
pub use storage::Storage;
