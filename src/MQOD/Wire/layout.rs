use crate::Core::constants::{
    MQ_Q_MGR_NAME_LENGTH, MQ_Q_NAME_LENGTH, MQ_SECURITY_ID_LENGTH, MQ_USER_ID_LENGTH,
};
use libc::c_void;

/// Variable-length string descriptor, as laid out by the native client.
///
/// `vs_ptr` points at `vs_buf_size` bytes of character data of which the
/// first `vs_length` are meaningful. `vs_offset` addressing is never used.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct MQCHARV {
    pub vs_ptr: *mut c_void,
    pub vs_offset: i32,
    pub vs_buf_size: i32,
    pub vs_length: i32,
    pub vs_ccsid: i32,
}

/// The MQOD version 4 structure.
///
/// Field order and widths are the native contract and must not change.
/// On 64-bit targets this is 424 bytes; on 32-bit targets 400.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct MQOD {
    /// Always `"OD  "`.
    pub struc_id: [u8; 4],
    pub version: i32,
    pub object_type: i32,
    pub object_name: [u8; MQ_Q_NAME_LENGTH],
    pub object_q_mgr_name: [u8; MQ_Q_MGR_NAME_LENGTH],
    pub dynamic_q_name: [u8; MQ_Q_NAME_LENGTH],
    pub alternate_user_id: [u8; MQ_USER_ID_LENGTH],

    // Distribution-list block. Unsupported: always zero / null.
    pub(crate) recs_present: i32,
    pub(crate) known_dest_count: i32,
    pub(crate) unknown_dest_count: i32,
    pub(crate) invalid_dest_count: i32,
    pub(crate) object_rec_offset: i32,
    pub(crate) response_rec_offset: i32,
    pub(crate) object_rec_ptr: *mut c_void,
    pub(crate) response_rec_ptr: *mut c_void,

    pub alternate_security_id: [u8; MQ_SECURITY_ID_LENGTH],
    pub resolved_q_name: [u8; MQ_Q_NAME_LENGTH],
    pub resolved_q_mgr_name: [u8; MQ_Q_MGR_NAME_LENGTH],

    pub object_string: MQCHARV,
    pub selection_string: MQCHARV,
    pub res_object_string: MQCHARV,
    pub resolved_type: i32,
}

/// Byte offset of the distribution-list block.
pub const DIST_LIST_OFFSET: usize = 4 + 4 + 4
    + MQ_Q_NAME_LENGTH
    + MQ_Q_MGR_NAME_LENGTH
    + MQ_Q_NAME_LENGTH
    + MQ_USER_ID_LENGTH;

/// Byte length of the distribution-list block (six MQLONGs, two MQPTRs).
pub const DIST_LIST_LEN: usize = 6 * 4 + 2 * std::mem::size_of::<*mut c_void>();
