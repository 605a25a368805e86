//! Well-known DRM scheme identifiers.

use uuid::{Uuid, uuid};

/// Widevine.
pub const WIDEVINE_UUID: Uuid = uuid!("edef8ba9-79d6-4ace-a3c8-27dcd51d21ed");
/// PlayReady.
pub const PLAYREADY_UUID: Uuid = uuid!("9a04f079-9840-4286-ab92-e65be0885f95");
/// ClearKey.
pub const CLEARKEY_UUID: Uuid = uuid!("e2719d58-a985-b3c9-781a-b030af78d30e");
/// Common PSSH box system id.
pub const COMMON_PSSH_UUID: Uuid = uuid!("1077efec-c0b2-4d02-ace3-3c1e52e2fb4b");

/// Human readable name for log context.
pub fn scheme_name(scheme: Uuid) -> Option<&'static str> {
    match scheme {
        WIDEVINE_UUID => Some("widevine"),
        PLAYREADY_UUID => Some("playready"),
        CLEARKEY_UUID => Some("clearkey"),
        COMMON_PSSH_UUID => Some("common-pssh"),
        _ => None,
    }
}
