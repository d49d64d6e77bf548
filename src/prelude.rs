/* 

This is intended to quickly import commonly used items across
the crate.

@date: 8 Nov, 2025
*/

// Almost every module logs, so tracing macros live here
pub use tracing::{info, error, warn, debug};
pub use smart_default::SmartDefault;
pub use serde::{Deserialize, Serialize};
