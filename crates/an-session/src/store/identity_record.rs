use crate::store::{DurableStore, LoadResult, StoreResult};

use an_core::Identity;
use log::{error, info, warn};

/// Storage key of the signed-in identity.
pub const USER_STORAGE_KEY: &str = "al_nakhwa_user";

/// Reads the identity record once at startup.
///
/// Returns:
/// - `LoadResult { identity: Some(..), corruption_error: None }` - record parsed
/// - `LoadResult { identity: None, corruption_error: None }` - no record
/// - `LoadResult { identity: None, corruption_error: Some(..) }` - record was corrupt and has been purged
///
/// Read failures are returned as errors and leave the record in place.
pub fn load_identity(store: &dyn DurableStore) -> StoreResult<LoadResult> {
    let Some(contents) = store.get(USER_STORAGE_KEY)? else {
        info!("No stored identity (first launch or signed out)");
        return Ok(LoadResult::default());
    };

    match serde_json::from_str::<Identity>(&contents) {
        Ok(identity) => {
            info!("Restored identity {}", identity.id);
            Ok(LoadResult {
                identity: Some(identity),
                corruption_error: None,
            })
        }
        Err(e) => {
            let message = e.to_string();
            warn!("Stored identity is corrupted: {message}");
            if let Err(e) = store.discard_corrupted(USER_STORAGE_KEY) {
                error!("Failed to purge corrupted identity: {e}");
            }
            Ok(LoadResult {
                identity: None,
                corruption_error: Some(message),
            })
        }
    }
}

pub fn save_identity(store: &dyn DurableStore, identity: &Identity) -> StoreResult<()> {
    let json = serde_json::to_string(identity)?;
    store.set(USER_STORAGE_KEY, &json)?;
    info!("Saved identity {}", identity.id);
    Ok(())
}

pub fn clear_identity(store: &dyn DurableStore) -> StoreResult<()> {
    store.remove(USER_STORAGE_KEY)
}
