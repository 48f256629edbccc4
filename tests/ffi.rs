// tests/ffi.rs
//
// Drives the C ABI the way a native caller would.

use mqod::ffi::*;
use mqod::MQOD::Structs::Field;
use std::ffi::CString;
use std::ptr;

fn set(handle: *mut DescriptorHandle, field: Field, value: &str) -> i32 {
    let c = CString::new(value).unwrap();
    unsafe { mqod_descriptor_set_field(handle, field as i32, c.as_ptr(), value.len()) }
}

fn get(handle: *const DescriptorHandle, field: Field) -> String {
    let mut buf = vec![0 as libc::c_char; 128];
    let mut len = buf.len();
    let rc = unsafe { mqod_descriptor_get_field(handle, field as i32, buf.as_mut_ptr(), &mut len) };
    assert_eq!(rc, MQOD_SUCCESS);
    let bytes: Vec<u8> = buf[..len].iter().map(|&c| c as u8).collect();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_encode_call_decode_through_ffi() {
    let desc = mqod_descriptor_new();
    assert_eq!(set(desc, Field::ObjectName, "MY.QUEUE"), MQOD_SUCCESS);
    assert_eq!(set(desc, Field::ObjectQMgrName, "QM1"), MQOD_SUCCESS);

    let mut wire = ptr::null_mut();
    assert_eq!(unsafe { mqod_encode(desc, &mut wire) }, MQOD_SUCCESS);
    assert!(!wire.is_null());

    let raw = unsafe { mqod_wire_raw(wire) };
    assert!(!raw.is_null());
    unsafe {
        let od = &mut *raw;
        assert_eq!(&od.struc_id, b"OD  ");
        assert_eq!(&od.object_name[..8], b"MY.QUEUE");
        od.resolved_q_name[..6].copy_from_slice(b"XMIT.Q");
        od.resolved_type = 1;
    }

    assert_eq!(unsafe { mqod_decode(wire, desc) }, MQOD_SUCCESS);
    assert_eq!(get(desc, Field::ResolvedQName), "XMIT.Q");
    assert_eq!(get(desc, Field::DynamicQName), "AMQ.*");

    let (mut ot, mut rt) = (0, 0);
    assert_eq!(unsafe { mqod_descriptor_get_types(desc, &mut ot, &mut rt) }, MQOD_SUCCESS);
    assert_eq!((ot, rt), (1, 1));

    unsafe {
        mqod_wire_free(wire);
        mqod_descriptor_free(desc);
    }
}

#[test]
fn test_declared_length_mismatch() {
    let desc = mqod_descriptor_new();
    let c = CString::new("topic/a").unwrap();
    let rc = unsafe { mqod_descriptor_set_field(desc, Field::ObjectString as i32, c.as_ptr(), 3) };
    assert_eq!(rc, MQOD_ERROR_INVALID_LENGTH);
    assert_eq!(get(desc, Field::ObjectString), "");
    unsafe { mqod_descriptor_free(desc) };
}

#[test]
fn test_field_too_long_reported_on_encode() {
    let desc = mqod_descriptor_new();
    assert_eq!(set(desc, Field::AlternateUserId, "a-very-long-user"), MQOD_SUCCESS);

    let mut wire = ptr::null_mut();
    assert_eq!(unsafe { mqod_encode(desc, &mut wire) }, MQOD_ERROR_FIELD_TOO_LONG);
    assert!(wire.is_null());
    unsafe { mqod_descriptor_free(desc) };
}

#[test]
fn test_invalid_arguments() {
    let desc = mqod_descriptor_new();
    let c = CString::new("x").unwrap();

    assert_eq!(
        unsafe { mqod_descriptor_set_field(desc, 42, c.as_ptr(), 1) },
        MQOD_ERROR_INVALID_ARG
    );
    assert_eq!(
        unsafe { mqod_descriptor_set_field(ptr::null_mut(), 1, c.as_ptr(), 1) },
        MQOD_ERROR_NULL_POINTER
    );
    assert_eq!(unsafe { mqod_encode(desc, ptr::null_mut()) }, MQOD_ERROR_NULL_POINTER);
    assert!(unsafe { mqod_wire_raw(ptr::null_mut()) }.is_null());

    unsafe { mqod_descriptor_free(desc) };
}

#[test]
fn test_get_field_buffer_too_small() {
    let desc = mqod_descriptor_new();
    set(desc, Field::ObjectName, "SYSTEM.DEFAULT.LOCAL.QUEUE");

    let mut buf = [0 as libc::c_char; 8];
    let mut len = buf.len();
    let rc = unsafe { mqod_descriptor_get_field(desc, Field::ObjectName as i32, buf.as_mut_ptr(), &mut len) };
    assert_eq!(rc, MQOD_ERROR_BUFFER_TOO_SMALL);
    assert_eq!(len, 26);

    unsafe { mqod_descriptor_free(desc) };
}

#[test]
fn test_security_id_and_type_setters() {
    let desc = mqod_descriptor_new();
    let id = [7u8; 50];
    assert_eq!(unsafe { mqod_descriptor_set_security_id(desc, id.as_ptr(), id.len()) }, MQOD_SUCCESS);
    assert_eq!(unsafe { mqod_descriptor_set_object_type(desc, 8) }, MQOD_SUCCESS);

    let mut wire = ptr::null_mut();
    assert_eq!(unsafe { mqod_encode(desc, &mut wire) }, MQOD_SUCCESS);
    unsafe {
        let od = &*mqod_wire_raw(wire);
        assert_eq!(od.object_type, 8);
        assert_eq!(od.alternate_security_id, [7u8; 40]);
        mqod_wire_free(wire);
        mqod_descriptor_free(desc);
    }
}

#[test]
fn test_default_wire_through_ffi() {
    let wire = mqod_wire_new();
    unsafe {
        let od = &*mqod_wire_raw(wire);
        assert_eq!(od.version, 4);
        assert!(od.distribution_list_unset());
        mqod_wire_free(wire);
    }
}
