use crate::Core::strings::get_fixed_string;
use crate::MQOD::Structs::{Field, ObjectType};
use crate::MQOD::Wire::{WireRecord, MQCHARV, MQOD};
use std::fmt;

/// Debug function for MQOD
///
/// Shows fixed-width fields trimmed, object types decoded and pointers as
/// addresses. The distribution-list block is summarised as a single flag.
pub fn debug_mqod(od: &MQOD, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MQOD")
        .field("struc_id", &String::from_utf8_lossy(&od.struc_id))
        .field("version", &od.version)
        .field("object_type", &ObjectType::from(od.object_type))
        .field("object_name", &get_fixed_string(&od.object_name))
        .field("object_q_mgr_name", &get_fixed_string(&od.object_q_mgr_name))
        .field("dynamic_q_name", &get_fixed_string(&od.dynamic_q_name))
        .field("alternate_user_id", &get_fixed_string(&od.alternate_user_id))
        .field("distribution_list_unset", &od.distribution_list_unset())
        .field("alternate_security_id", &hex(&od.alternate_security_id))
        .field("resolved_q_name", &get_fixed_string(&od.resolved_q_name))
        .field("resolved_q_mgr_name", &get_fixed_string(&od.resolved_q_mgr_name))
        .field("object_string", &od.object_string)
        .field("selection_string", &od.selection_string)
        .field("res_object_string", &od.res_object_string)
        .field("resolved_type", &ObjectType::from(od.resolved_type))
        .finish()
}

/// Debug function for MQCHARV
///
/// Prints the pointer as an address; the character data is not read.
pub fn debug_charv(cv: &MQCHARV, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MQCHARV")
        .field("vs_ptr", &format_args!("{:p}", cv.vs_ptr))
        .field("vs_buf_size", &cv.vs_buf_size)
        .field("vs_length", &cv.vs_length)
        .field("vs_ccsid", &cv.vs_ccsid)
        .finish_non_exhaustive()
}

/// Debug function for WireRecord
///
/// Shows the raw record plus the decoded variable-length strings. Only
/// buffers the record owns are read.
pub fn debug_wire_record(wire: &WireRecord, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("WireRecord")
        .field("raw", wire.raw())
        .field("object_string", &wire.charv_string(Field::ObjectString))
        .field("selection_string", &wire.charv_string(Field::SelectionString))
        .field("res_object_string", &wire.charv_string(Field::ResObjectString))
        .finish()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
