use crate::Core::error::MarshalError;
use crate::MQOD::Structs::{Field, ObjectDescriptor, ObjectType};
use crate::MQOD::Wire::{WireRecord, MQOD};
use crate::MQOD::Marshaller;
use libc::{c_char, c_int};
use std::ffi::CStr;
use std::ptr;
use tracing::error;

// Status codes
pub const MQOD_SUCCESS: i32 = 0;
pub const MQOD_ERROR_NULL_POINTER: i32 = -1;
pub const MQOD_ERROR_INVALID_ARG: i32 = -2;
pub const MQOD_ERROR_FIELD_TOO_LONG: i32 = -3;
pub const MQOD_ERROR_INVALID_LENGTH: i32 = -4;
pub const MQOD_ERROR_BUFFER_TOO_SMALL: i32 = -5;

/// Handle to a descriptor instance (opaque pointer)
pub struct DescriptorHandle {
    inner: ObjectDescriptor,
}

/// Handle to an encoded wire record (opaque pointer)
pub struct WireHandle {
    inner: WireRecord,
}

fn status_of(err: &MarshalError) -> i32 {
    match err {
        MarshalError::FieldTooLong { .. } => MQOD_ERROR_FIELD_TOO_LONG,
        MarshalError::InvalidLength { .. } => MQOD_ERROR_INVALID_LENGTH,
    }
}

// -----------------------------------------------------------------------------
// Descriptor API
// -----------------------------------------------------------------------------

/// Create a descriptor with default values.
///
/// # Returns
/// * Pointer to `DescriptorHandle`; release with `mqod_descriptor_free`.
#[no_mangle]
pub extern "C" fn mqod_descriptor_new() -> *mut DescriptorHandle {
    Box::into_raw(Box::new(DescriptorHandle {
        inner: ObjectDescriptor::default(),
    }))
}

/// Free a descriptor handle.
///
/// # Safety
/// `handle` must be null or a pointer returned by `mqod_descriptor_new`
/// that has not been freed.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_free(handle: *mut DescriptorHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Set a string field.
///
/// # Arguments
/// * `field_id` - One of the `Field` discriminants.
/// * `value` - NUL-terminated string.
/// * `len` - Declared length of `value` in bytes, excluding the NUL.
///
/// # Returns
/// * 0 on success.
/// * MQOD_ERROR_INVALID_LENGTH if `len` disagrees with the string.
/// * MQOD_ERROR_INVALID_ARG for an unknown field or non UTF-8 data.
///
/// # Safety
/// `handle` must be a live descriptor handle and `value` a valid C string.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_set_field(
    handle: *mut DescriptorHandle,
    field_id: c_int,
    value: *const c_char,
    len: usize,
) -> i32 {
    if handle.is_null() || value.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    let Some(field) = Field::from_id(field_id) else {
        return MQOD_ERROR_INVALID_ARG;
    };

    let bytes = CStr::from_ptr(value).to_bytes();
    if bytes.len() != len {
        let err = MarshalError::InvalidLength {
            field,
            declared: len,
            actual: bytes.len(),
        };
        error!("FFI Error: {err}");
        return status_of(&err);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => {
            let desc = &mut (*handle).inner;
            *desc.field_mut(field) = s.to_owned();
            MQOD_SUCCESS
        }
        Err(e) => {
            error!("FFI Error: {field} is not UTF-8: {e}");
            MQOD_ERROR_INVALID_ARG
        }
    }
}

/// Copy a string field out, NUL terminated.
///
/// # Arguments
/// * `out_buf` - Buffer to write into.
/// * `out_len` - Input: size of buf, Output: length of the value (without NUL).
///
/// # Returns
/// * 0 on success.
/// * MQOD_ERROR_BUFFER_TOO_SMALL if the value and its NUL do not fit;
///   `out_len` then holds the value length.
///
/// # Safety
/// `handle` must be a live descriptor handle; `out_buf` must be valid for
/// `*out_len` bytes.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_get_field(
    handle: *const DescriptorHandle,
    field_id: c_int,
    out_buf: *mut c_char,
    out_len: *mut usize,
) -> i32 {
    if handle.is_null() || out_len.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    let Some(field) = Field::from_id(field_id) else {
        return MQOD_ERROR_INVALID_ARG;
    };

    let desc = &(*handle).inner;
    let value = desc.field(field).as_bytes();
    let max_len = *out_len;
    *out_len = value.len();

    if value.len() + 1 > max_len || out_buf.is_null() {
        return MQOD_ERROR_BUFFER_TOO_SMALL;
    }

    ptr::copy_nonoverlapping(value.as_ptr(), out_buf.cast::<u8>(), value.len());
    *out_buf.add(value.len()) = 0;
    MQOD_SUCCESS
}

/// Set the object type (an MQOT value).
///
/// # Safety
/// `handle` must be a live descriptor handle.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_set_object_type(
    handle: *mut DescriptorHandle,
    object_type: i32,
) -> i32 {
    if handle.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    (*handle).inner.object_type = ObjectType::from(object_type);
    MQOD_SUCCESS
}

/// Read the object type and resolved type (MQOT values).
///
/// # Safety
/// `handle` must be a live descriptor handle; out pointers must be writable.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_get_types(
    handle: *const DescriptorHandle,
    object_type: *mut i32,
    resolved_type: *mut i32,
) -> i32 {
    if handle.is_null() || object_type.is_null() || resolved_type.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    *object_type = (*handle).inner.object_type.into();
    *resolved_type = (*handle).inner.resolved_type.into();
    MQOD_SUCCESS
}

/// Set the alternate security id from `len` raw bytes.
///
/// # Safety
/// `handle` must be a live descriptor handle; `data` valid for `len` bytes.
#[no_mangle]
pub unsafe extern "C" fn mqod_descriptor_set_security_id(
    handle: *mut DescriptorHandle,
    data: *const u8,
    len: usize,
) -> i32 {
    if handle.is_null() || (data.is_null() && len != 0) {
        return MQOD_ERROR_NULL_POINTER;
    }
    (*handle).inner.alternate_security_id = if len == 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(data, len).to_vec()
    };
    MQOD_SUCCESS
}

// -----------------------------------------------------------------------------
// Wire record API
// -----------------------------------------------------------------------------

/// Encode a descriptor into a newly allocated wire record.
///
/// # Returns
/// * 0 on success with `*out_wire` set; release with `mqod_wire_free`.
/// * MQOD_ERROR_FIELD_TOO_LONG / MQOD_ERROR_INVALID_LENGTH on encode failure.
///
/// # Safety
/// `handle` must be a live descriptor handle; `out_wire` must be writable.
#[no_mangle]
pub unsafe extern "C" fn mqod_encode(
    handle: *const DescriptorHandle,
    out_wire: *mut *mut WireHandle,
) -> i32 {
    if handle.is_null() || out_wire.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    *out_wire = ptr::null_mut();

    match Marshaller::default().encode(&(*handle).inner) {
        Ok(wire) => {
            *out_wire = Box::into_raw(Box::new(WireHandle { inner: wire }));
            MQOD_SUCCESS
        }
        Err(e) => {
            error!("FFI Error: Failed to encode MQOD: {e}");
            status_of(&e)
        }
    }
}

/// Allocate a wire record with default values.
#[no_mangle]
pub extern "C" fn mqod_wire_new() -> *mut WireHandle {
    Box::into_raw(Box::new(WireHandle {
        inner: WireRecord::new(),
    }))
}

/// The raw MQOD to pass to the native call. Valid until `mqod_wire_free`.
///
/// # Safety
/// `wire` must be null or a live wire handle.
#[no_mangle]
pub unsafe extern "C" fn mqod_wire_raw(wire: *mut WireHandle) -> *mut MQOD {
    if wire.is_null() {
        return ptr::null_mut();
    }
    let record = &mut (*wire).inner;
    record.as_mut_ptr()
}

/// Decode a wire record back into a descriptor.
///
/// # Safety
/// Both handles must be live.
#[no_mangle]
pub unsafe extern "C" fn mqod_decode(
    wire: *const WireHandle,
    handle: *mut DescriptorHandle,
) -> i32 {
    if wire.is_null() || handle.is_null() {
        return MQOD_ERROR_NULL_POINTER;
    }
    Marshaller::default().decode_into(&(*wire).inner, &mut (*handle).inner);
    MQOD_SUCCESS
}

/// Free a wire handle and every buffer it owns.
///
/// # Safety
/// `wire` must be null or a live wire handle.
#[no_mangle]
pub unsafe extern "C" fn mqod_wire_free(wire: *mut WireHandle) {
    if !wire.is_null() {
        drop(Box::from_raw(wire));
    }
}
