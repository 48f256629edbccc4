use super::layout::{MQCHARV, MQOD};
use super::Wire::WireRecord;
use crate::Core::constants::*;
use crate::Core::error::{MarshalError, Result};
use crate::Core::strings::{blank_fixed_string, get_fixed_string};
use crate::MQOD::Structs::Field;
use libc::c_void;
use std::mem::size_of;
use std::ptr;
use tracing::trace;

impl MQCHARV {
    /// An empty string: null pointer, zero lengths, application CCSID.
    pub const fn empty() -> Self {
        Self {
            vs_ptr: ptr::null_mut(),
            vs_offset: 0,
            vs_buf_size: 0,
            vs_length: 0,
            vs_ccsid: MQCCSI_APPL,
        }
    }
}

impl Default for MQCHARV {
    fn default() -> Self {
        Self::empty()
    }
}

impl MQOD {
    /// A version 4 MQOD with every field at its default.
    pub fn new() -> Self {
        let mut od = MQOD {
            struc_id: *MQOD_STRUC_ID,
            version: MQOD_VERSION_4,
            object_type: MQOT_Q,
            object_name: [0; MQ_Q_NAME_LENGTH],
            object_q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
            dynamic_q_name: [0; MQ_Q_NAME_LENGTH],
            alternate_user_id: [0; MQ_USER_ID_LENGTH],
            recs_present: 0,
            known_dest_count: 0,
            unknown_dest_count: 0,
            invalid_dest_count: 0,
            object_rec_offset: 0,
            response_rec_offset: 0,
            object_rec_ptr: ptr::null_mut(),
            response_rec_ptr: ptr::null_mut(),
            alternate_security_id: [0; MQ_SECURITY_ID_LENGTH],
            resolved_q_name: [0; MQ_Q_NAME_LENGTH],
            resolved_q_mgr_name: [0; MQ_Q_MGR_NAME_LENGTH],
            object_string: MQCHARV::empty(),
            selection_string: MQCHARV::empty(),
            res_object_string: MQCHARV::empty(),
            resolved_type: MQOT_NONE,
        };

        blank_fixed_string(&mut od.object_name);
        blank_fixed_string(&mut od.object_q_mgr_name);
        blank_fixed_string(&mut od.dynamic_q_name);
        od.dynamic_q_name[..DEFAULT_DYNAMIC_Q_NAME.len()]
            .copy_from_slice(DEFAULT_DYNAMIC_Q_NAME.as_bytes());
        blank_fixed_string(&mut od.alternate_user_id);
        blank_fixed_string(&mut od.resolved_q_name);
        blank_fixed_string(&mut od.resolved_q_mgr_name);
        od
    }

    /// True when every distribution-list field still holds zero / null.
    pub fn distribution_list_unset(&self) -> bool {
        self.recs_present == 0
            && self.known_dest_count == 0
            && self.unknown_dest_count == 0
            && self.invalid_dest_count == 0
            && self.object_rec_offset == 0
            && self.response_rec_offset == 0
            && self.object_rec_ptr.is_null()
            && self.response_rec_ptr.is_null()
    }

    /// Mutable access to the fixed-width array backing a short string field.
    pub fn fixed_field_mut(&mut self, field: Field) -> Option<&mut [u8]> {
        match field {
            Field::ObjectName => Some(&mut self.object_name),
            Field::ObjectQMgrName => Some(&mut self.object_q_mgr_name),
            Field::DynamicQName => Some(&mut self.dynamic_q_name),
            Field::AlternateUserId => Some(&mut self.alternate_user_id),
            Field::ResolvedQName => Some(&mut self.resolved_q_name),
            Field::ResolvedQMgrName => Some(&mut self.resolved_q_mgr_name),
            _ => None,
        }
    }

    pub fn fixed_field(&self, field: Field) -> Option<&[u8]> {
        match field {
            Field::ObjectName => Some(&self.object_name),
            Field::ObjectQMgrName => Some(&self.object_q_mgr_name),
            Field::DynamicQName => Some(&self.dynamic_q_name),
            Field::AlternateUserId => Some(&self.alternate_user_id),
            Field::ResolvedQName => Some(&self.resolved_q_name),
            Field::ResolvedQMgrName => Some(&self.resolved_q_mgr_name),
            _ => None,
        }
    }

    pub fn charv(&self, field: Field) -> Option<&MQCHARV> {
        match field {
            Field::ObjectString => Some(&self.object_string),
            Field::SelectionString => Some(&self.selection_string),
            Field::ResObjectString => Some(&self.res_object_string),
            _ => None,
        }
    }

    pub fn charv_mut(&mut self, field: Field) -> Option<&mut MQCHARV> {
        match field {
            Field::ObjectString => Some(&mut self.object_string),
            Field::SelectionString => Some(&mut self.selection_string),
            Field::ResObjectString => Some(&mut self.res_object_string),
            _ => None,
        }
    }

    /// Native-endian byte image of the record, exactly as the native
    /// library would see it in memory. Pointers are rendered as addresses
    /// and tail padding as zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(size_of::<MQOD>());
        let ptr_bytes = |p: *mut c_void| (p as usize).to_ne_bytes();
        let charv = |out: &mut Vec<u8>, cv: &MQCHARV| {
            out.extend_from_slice(&ptr_bytes(cv.vs_ptr));
            out.extend_from_slice(&cv.vs_offset.to_ne_bytes());
            out.extend_from_slice(&cv.vs_buf_size.to_ne_bytes());
            out.extend_from_slice(&cv.vs_length.to_ne_bytes());
            out.extend_from_slice(&cv.vs_ccsid.to_ne_bytes());
        };

        out.extend_from_slice(&self.struc_id);
        out.extend_from_slice(&self.version.to_ne_bytes());
        out.extend_from_slice(&self.object_type.to_ne_bytes());
        out.extend_from_slice(&self.object_name);
        out.extend_from_slice(&self.object_q_mgr_name);
        out.extend_from_slice(&self.dynamic_q_name);
        out.extend_from_slice(&self.alternate_user_id);
        for v in [
            self.recs_present,
            self.known_dest_count,
            self.unknown_dest_count,
            self.invalid_dest_count,
            self.object_rec_offset,
            self.response_rec_offset,
        ] {
            out.extend_from_slice(&v.to_ne_bytes());
        }
        out.extend_from_slice(&ptr_bytes(self.object_rec_ptr));
        out.extend_from_slice(&ptr_bytes(self.response_rec_ptr));
        out.extend_from_slice(&self.alternate_security_id);
        out.extend_from_slice(&self.resolved_q_name);
        out.extend_from_slice(&self.resolved_q_mgr_name);
        charv(&mut out, &self.object_string);
        charv(&mut out, &self.selection_string);
        charv(&mut out, &self.res_object_string);
        out.extend_from_slice(&self.resolved_type.to_ne_bytes());

        out.resize(size_of::<MQOD>(), 0);
        out
    }
}

impl Default for MQOD {
    fn default() -> Self {
        Self::new()
    }
}

fn charv_slot(field: Field) -> Option<usize> {
    match field {
        Field::ObjectString => Some(0),
        Field::SelectionString => Some(1),
        Field::ResObjectString => Some(2),
        _ => None,
    }
}

impl WireRecord {
    /// Allocate a record with every field at its default.
    pub fn new() -> Self {
        trace!("allocating MQOD wire record");
        Self {
            raw: MQOD::new(),
            strings: [None, None, None],
        }
    }

    pub fn raw(&self) -> &MQOD {
        &self.raw
    }

    /// The record to hand to the native call.
    pub fn raw_mut(&mut self) -> &mut MQOD {
        &mut self.raw
    }

    pub fn as_mut_ptr(&mut self) -> *mut MQOD {
        &mut self.raw
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.raw.to_bytes()
    }

    /// Attach a variable-length string to one of the MQCHARV fields.
    ///
    /// `declared_len` must equal `data.len()`. At least `reserve` bytes of
    /// buffer are allocated so the native call can write a longer value
    /// back. An empty value with no reserve leaves the field null.
    pub fn set_charv(
        &mut self,
        field: Field,
        declared_len: usize,
        data: &[u8],
        reserve: usize,
    ) -> Result<()> {
        let slot = charv_slot(field).ok_or(MarshalError::InvalidLength {
            field,
            declared: declared_len,
            actual: data.len(),
        })?;

        if declared_len != data.len() {
            return Err(MarshalError::InvalidLength {
                field,
                declared: declared_len,
                actual: data.len(),
            });
        }

        let buf_size = data.len().max(reserve);
        if i32::try_from(buf_size).is_err() {
            return Err(MarshalError::InvalidLength {
                field,
                declared: declared_len,
                actual: data.len(),
            });
        }

        let mut cv = MQCHARV::empty();
        if buf_size == 0 {
            self.strings[slot] = None;
        } else {
            let mut buf = vec![0u8; buf_size].into_boxed_slice();
            buf[..data.len()].copy_from_slice(data);
            cv.vs_ptr = buf.as_mut_ptr().cast();
            cv.vs_buf_size = buf_size as i32;
            cv.vs_length = data.len() as i32;
            self.strings[slot] = Some(buf);
        }

        trace!(field = %field, len = data.len(), buf_size, "set MQCHARV");
        if let Some(target) = self.raw.charv_mut(field) {
            *target = cv;
        }
        Ok(())
    }

    /// Read an MQCHARV field back using its recorded length.
    ///
    /// Only buffers this record owns are read; lengths that overrun one are
    /// clamped to it. A field pointing anywhere else reads back empty, see
    /// [`WireRecord::charv_string_unchecked`].
    pub fn charv_string(&self, field: Field) -> String {
        let (Some(slot), Some(cv)) = (charv_slot(field), self.raw.charv(field)) else {
            return String::new();
        };
        if cv.vs_ptr.is_null() || cv.vs_length <= 0 {
            return String::new();
        }
        let len = cv.vs_length as usize;

        match &self.strings[slot] {
            Some(buf) if ptr::eq(buf.as_ptr(), cv.vs_ptr as *const u8) => {
                String::from_utf8_lossy(&buf[..len.min(buf.len())]).into_owned()
            }
            _ => String::new(),
        }
    }

    /// Like [`WireRecord::charv_string`], but also follows a `vs_ptr` the
    /// native call redirected to its own storage.
    ///
    /// # Safety
    /// If the field does not point at a buffer this record owns, `vs_ptr`
    /// must be valid for reads of `vs_length` bytes for the duration of
    /// this call.
    pub unsafe fn charv_string_unchecked(&self, field: Field) -> String {
        let Some(cv) = self.raw.charv(field) else {
            return String::new();
        };
        if cv.vs_ptr.is_null() || cv.vs_length <= 0 || self.owns_charv(field) {
            return self.charv_string(field);
        }
        let bytes = std::slice::from_raw_parts(cv.vs_ptr as *const u8, cv.vs_length as usize);
        String::from_utf8_lossy(bytes).into_owned()
    }

    // True when the field still points at the buffer allocated for it.
    fn owns_charv(&self, field: Field) -> bool {
        match (charv_slot(field), self.raw.charv(field)) {
            (Some(slot), Some(cv)) => self.strings[slot]
                .as_ref()
                .is_some_and(|buf| ptr::eq(buf.as_ptr(), cv.vs_ptr as *const u8)),
            _ => false,
        }
    }

    /// Read a fixed-width field back with padding stripped.
    pub fn fixed_string(&self, field: Field) -> String {
        self.raw.fixed_field(field).map(get_fixed_string).unwrap_or_default()
    }

    /// Capacity of the buffer backing an MQCHARV field, if any.
    pub fn charv_capacity(&self, field: Field) -> usize {
        charv_slot(field)
            .and_then(|slot| self.strings[slot].as_ref())
            .map_or(0, |buf| buf.len())
    }
}

impl Default for WireRecord {
    fn default() -> Self {
        Self::new()
    }
}
