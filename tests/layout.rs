// Layout conformance tests for the native MQOD contract.
// These tests assert sizes, alignments, and field offsets for
// MQOD and MQCHARV. They also print the observed values
// to aid debugging when a mismatch occurs on a given platform.
use memoffset::offset_of;
use mqod::MQOD::Wire::layout::{DIST_LIST_LEN, DIST_LIST_OFFSET};
use mqod::MQOD::Wire::{MQCHARV, MQOD};
use std::mem::{align_of, size_of};

const PTR: usize = size_of::<*mut u8>();

#[test]
fn test_mqcharv_layout() {
    let size = size_of::<MQCHARV>();
    let align = align_of::<MQCHARV>();
    let off_ptr = offset_of!(MQCHARV, vs_ptr);
    let off_offset = offset_of!(MQCHARV, vs_offset);
    let off_buf_size = offset_of!(MQCHARV, vs_buf_size);
    let off_length = offset_of!(MQCHARV, vs_length);
    let off_ccsid = offset_of!(MQCHARV, vs_ccsid);

    println!(
        "MQCHARV => size: {size}, align: {align}, offsets: [vs_ptr:{off_ptr}, vs_offset:{off_offset}, vs_buf_size:{off_buf_size}, vs_length:{off_length}, vs_ccsid:{off_ccsid}]"
    );

    assert_eq!(size, PTR + 16);
    assert_eq!(align, align_of::<*mut u8>());
    assert_eq!(off_ptr, 0);
    assert_eq!(off_offset, PTR);
    assert_eq!(off_buf_size, PTR + 4);
    assert_eq!(off_length, PTR + 8);
    assert_eq!(off_ccsid, PTR + 12);
}

#[test]
fn test_mqod_layout() {
    // Fixed part up to the distribution-list block.
    assert_eq!(offset_of!(MQOD, struc_id), 0);
    assert_eq!(offset_of!(MQOD, version), 4);
    assert_eq!(offset_of!(MQOD, object_type), 8);
    assert_eq!(offset_of!(MQOD, object_name), 12);
    assert_eq!(offset_of!(MQOD, object_q_mgr_name), 60);
    assert_eq!(offset_of!(MQOD, dynamic_q_name), 108);
    assert_eq!(offset_of!(MQOD, alternate_user_id), 156);
    assert_eq!(DIST_LIST_OFFSET, 168);
    assert_eq!(DIST_LIST_LEN, 24 + 2 * PTR);

    // Everything after the block moves with the pointer width.
    let sec = 192 + 2 * PTR;
    let off_sec = offset_of!(MQOD, alternate_security_id);
    let off_rq = offset_of!(MQOD, resolved_q_name);
    let off_rqm = offset_of!(MQOD, resolved_q_mgr_name);
    let off_obj_str = offset_of!(MQOD, object_string);
    let off_sel_str = offset_of!(MQOD, selection_string);
    let off_res_str = offset_of!(MQOD, res_object_string);
    let off_res_type = offset_of!(MQOD, resolved_type);

    println!(
        "MQOD => size: {}, align: {}, offsets: [alternate_security_id:{off_sec}, resolved_q_name:{off_rq}, resolved_q_mgr_name:{off_rqm}, object_string:{off_obj_str}, selection_string:{off_sel_str}, res_object_string:{off_res_str}, resolved_type:{off_res_type}]",
        size_of::<MQOD>(),
        align_of::<MQOD>()
    );

    assert_eq!(off_sec, sec);
    assert_eq!(off_rq, sec + 40);
    assert_eq!(off_rqm, sec + 88);
    assert_eq!(off_obj_str, sec + 136);
    assert_eq!(off_sel_str, off_obj_str + size_of::<MQCHARV>());
    assert_eq!(off_res_str, off_sel_str + size_of::<MQCHARV>());
    assert_eq!(off_res_type, off_res_str + size_of::<MQCHARV>());

    let raw = off_res_type + 4;
    let aligned = (raw + PTR - 1) & !(PTR - 1);
    assert_eq!(size_of::<MQOD>(), aligned);
    if PTR == 8 {
        assert_eq!(size_of::<MQOD>(), 424);
    } else if PTR == 4 {
        assert_eq!(size_of::<MQOD>(), 400);
    }
}

#[test]
fn test_byte_image_matches_struct_size() {
    let od = MQOD::new();
    assert_eq!(od.to_bytes().len(), size_of::<MQOD>());
}
