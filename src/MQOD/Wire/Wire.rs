// Owning wrapper around the native MQOD record.

use super::layout::MQOD;

/// Number of MQCHARV fields in an MQOD.
pub const CHARV_FIELDS: usize = 3;

/// An MQOD together with the character buffers its MQCHARV fields point at.
///
/// The raw record is only valid while this value is alive: dropping it
/// releases every buffer the native call may have been given. It is
/// neither `Send` nor `Sync`, so a record stays on the thread that made
/// the call.
pub struct WireRecord {
    /// The structure handed to the native call.
    pub(crate) raw: MQOD,

    /// Backing storage for `object_string`, `selection_string` and
    /// `res_object_string`, in that order. Boxed slices never reallocate,
    /// so the pointers stored in `raw` stay valid.
    pub(crate) strings: [Option<Box<[u8]>>; CHARV_FIELDS],
}
