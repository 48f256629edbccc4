// MQI constants needed by the object descriptor.
// Values are fixed by the native client headers (cmqc.h).

/// Structure identifier for MQOD, blank padded to four characters.
pub const MQOD_STRUC_ID: &[u8; 4] = b"OD  ";

/// The only structure version this crate emits.
pub const MQOD_VERSION_4: i32 = 4;

pub const MQ_Q_NAME_LENGTH: usize = 48;
pub const MQ_Q_MGR_NAME_LENGTH: usize = 48;
pub const MQ_USER_ID_LENGTH: usize = 12;
pub const MQ_SECURITY_ID_LENGTH: usize = 40;

/// Template used for model-queue opens when the caller does not supply one.
pub const DEFAULT_DYNAMIC_Q_NAME: &str = "AMQ.*";

// Object types
pub const MQOT_NONE: i32 = 0;
pub const MQOT_Q: i32 = 1;
pub const MQOT_NAMELIST: i32 = 2;
pub const MQOT_PROCESS: i32 = 3;
pub const MQOT_STORAGE_CLASS: i32 = 4;
pub const MQOT_Q_MGR: i32 = 5;
pub const MQOT_CHANNEL: i32 = 6;
pub const MQOT_AUTH_INFO: i32 = 7;
pub const MQOT_TOPIC: i32 = 8;
pub const MQOT_COMM_INFO: i32 = 9;
pub const MQOT_CF_STRUC: i32 = 10;
pub const MQOT_LISTENER: i32 = 11;
pub const MQOT_SERVICE: i32 = 12;

/// CCSID meaning "the application's own code page"; default for MQCHARV.
pub const MQCCSI_APPL: i32 = -3;

/// Default reserved size for output-capable variable strings.
pub const DEFAULT_OUTPUT_STRING_CAPACITY: usize = 4096;

/// Padding byte for fixed-width MQCHAR fields.
pub const MQ_BLANK: u8 = b' ';
