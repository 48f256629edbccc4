// Copies an ObjectDescriptor into an MQOD wire record and back.

use super::MarshallerBuilder;
use crate::Core::constants::MQOD_VERSION_4;
use crate::Core::error::{MarshalError, Result};
use crate::Core::strings::{copy_fixed_bytes, get_fixed_string, set_fixed_string, OverlengthPolicy};
use crate::MQOD::Structs::{Field, ObjectDescriptor};
use crate::MQOD::Wire::{WireRecord, MQOD};
use tracing::{debug, trace};

/// Encoder/decoder for object descriptors.
///
/// Marshalling is synchronous and allocation is the only side effect.
/// Use [`MarshallerBuilder`] to change how overlength names are handled
/// or how much room output strings get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marshaller {
    pub(crate) overlength: OverlengthPolicy,
    pub(crate) output_string_capacity: usize,
}

impl Default for Marshaller {
    fn default() -> Self {
        MarshallerBuilder::new().build()
    }
}

impl Marshaller {
    /// Start configuring a marshaller; see [`MarshallerBuilder`].
    pub fn builder() -> MarshallerBuilder {
        MarshallerBuilder::new()
    }

    pub fn overlength_policy(&self) -> OverlengthPolicy {
        self.overlength
    }

    pub fn output_string_capacity(&self) -> usize {
        self.output_string_capacity
    }

    /// Build a fresh wire record from `desc`.
    ///
    /// The version is always 4. Resolved names are output-only and are not
    /// copied. The security id is copied up to the field width; missing
    /// bytes stay zero.
    pub fn encode(&self, desc: &ObjectDescriptor) -> Result<WireRecord> {
        debug!(
            object_name = %desc.object_name,
            object_type = ?desc.object_type,
            "encoding MQOD"
        );

        let mut wire = WireRecord::new();
        {
            let od = wire.raw_mut();
            od.version = MQOD_VERSION_4;
            od.object_type = desc.object_type.into();

            for field in [
                Field::ObjectName,
                Field::ObjectQMgrName,
                Field::DynamicQName,
                Field::AlternateUserId,
            ] {
                if let Some(dest) = od.fixed_field_mut(field) {
                    set_fixed_string(dest, field, desc.field(field), self.overlength)?;
                }
            }

            copy_fixed_bytes(&mut od.alternate_security_id, &desc.alternate_security_id);
            od.resolved_type = desc.resolved_type.into();
        }

        for field in [
            Field::ObjectString,
            Field::SelectionString,
            Field::ResObjectString,
        ] {
            let value = desc.field(field);
            let reserve = if field.is_output_capable() {
                self.output_string_capacity
            } else {
                0
            };
            wire.set_charv(field, value.len(), value.as_bytes(), reserve)?;
        }

        Ok(wire)
    }

    /// Build a new descriptor from a wire record.
    ///
    /// Fixed-width names come back with trailing blanks and NULs stripped,
    /// so a name that ended in blanks does not survive the round trip.
    /// Variable-length strings are only read from buffers the record owns.
    pub fn decode(&self, wire: &WireRecord) -> ObjectDescriptor {
        let mut desc = ObjectDescriptor::default();
        self.decode_into(wire, &mut desc);
        desc
    }

    /// Overwrite every field of `desc` with the values held in `wire`.
    pub fn decode_into(&self, wire: &WireRecord, desc: &mut ObjectDescriptor) {
        let od = wire.raw();

        desc.object_type = od.object_type.into();
        desc.object_name = get_fixed_string(&od.object_name);
        desc.object_q_mgr_name = get_fixed_string(&od.object_q_mgr_name);
        desc.dynamic_q_name = get_fixed_string(&od.dynamic_q_name);
        desc.alternate_user_id = get_fixed_string(&od.alternate_user_id);
        desc.alternate_security_id = od.alternate_security_id.to_vec();
        desc.resolved_q_name = get_fixed_string(&od.resolved_q_name);
        desc.resolved_q_mgr_name = get_fixed_string(&od.resolved_q_mgr_name);
        desc.resolved_type = od.resolved_type.into();
        desc.object_string = wire.charv_string(Field::ObjectString);
        desc.selection_string = wire.charv_string(Field::SelectionString);
        desc.res_object_string = wire.charv_string(Field::ResObjectString);

        trace!(
            resolved_q_name = %desc.resolved_q_name,
            resolved_type = ?desc.resolved_type,
            "decoded MQOD"
        );
    }

    /// Encode `desc`, lend the raw record to `call`, and decode the result
    /// back into `desc`.
    ///
    /// The wire record and its buffers are released before this returns,
    /// whether `call` succeeds or not. `desc` is only updated on success.
    pub fn with_wire_record<T, E, F>(&self, desc: &mut ObjectDescriptor, call: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut MQOD) -> std::result::Result<T, E>,
        E: From<MarshalError>,
    {
        let mut wire = self.encode(desc)?;
        let out = call(wire.raw_mut())?;
        self.decode_into(&wire, desc);
        Ok(out)
    }
}

/// [`Marshaller::encode`] with the default configuration.
pub fn encode(desc: &ObjectDescriptor) -> Result<WireRecord> {
    Marshaller::default().encode(desc)
}

/// [`Marshaller::decode`] with the default configuration.
pub fn decode(wire: &WireRecord) -> ObjectDescriptor {
    Marshaller::default().decode(wire)
}

/// [`Marshaller::decode_into`] with the default configuration.
pub fn decode_into(wire: &WireRecord, desc: &mut ObjectDescriptor) {
    Marshaller::default().decode_into(wire, desc)
}

/// [`Marshaller::with_wire_record`] with the default configuration.
pub fn with_wire_record<T, E, F>(desc: &mut ObjectDescriptor, call: F) -> std::result::Result<T, E>
where
    F: FnOnce(&mut MQOD) -> std::result::Result<T, E>,
    E: From<MarshalError>,
{
    Marshaller::default().with_wire_record(desc, call)
}
