pub mod clock;
pub mod entry;
pub mod key;
pub mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CachedEntry;
pub use key::CacheKey;
pub use storage::AnswerCache;
