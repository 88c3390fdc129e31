//! Time-ordered identifiers.

use std::sync::{LazyLock, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::{ContextV7, Timestamp, Uuid};

use crate::error::IdError;

// Shared so ids minted in the same millisecond still sort by creation order.
static V7_CONTEXT: LazyLock<Mutex<ContextV7>> = LazyLock::new(|| Mutex::new(ContextV7::new()));

/// Generate a v7 UUID in its 36-character hyphenated form,
/// e.g. `01890a5d-ac96-774b-bcce-b302099a8057`.
pub fn generate_uuid() -> Result<String, IdError> {
    let since_epoch = SystemTime::now().duration_since(UNIX_EPOCH)?;

    let context = V7_CONTEXT.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let ts = Timestamp::from_unix(
        &*context,
        since_epoch.as_secs(),
        since_epoch.subsec_nanos(),
    );
    Ok(Uuid::new_v7(ts).to_string())
}
