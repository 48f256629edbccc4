use super::layout::{MQCHARV, MQOD};
use super::Wire::WireRecord;
use std::fmt;

// Debug proxy implementations that call the standalone debug functions
impl fmt::Debug for MQOD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_mqod(self, f)
    }
}

impl fmt::Debug for MQCHARV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_charv(self, f)
    }
}

impl fmt::Debug for WireRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::Debug::StructDebug::debug_wire_record(self, f)
    }
}
