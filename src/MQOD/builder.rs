use super::Marshaller;
use crate::Core::constants::DEFAULT_OUTPUT_STRING_CAPACITY;
use crate::Core::strings::OverlengthPolicy;

/// Configuration for a [`Marshaller`]; defaults reject overlength names.
pub struct MarshallerBuilder {
    overlength: OverlengthPolicy,
    output_string_capacity: usize,
}

impl Default for MarshallerBuilder {
    fn default() -> Self {
        Self {
            overlength: OverlengthPolicy::Reject,
            output_string_capacity: DEFAULT_OUTPUT_STRING_CAPACITY,
        }
    }
}

impl MarshallerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overlength_policy(mut self, policy: OverlengthPolicy) -> Self {
        self.overlength = policy;
        self
    }

    /// Bytes reserved for MQCHARV fields the native call may write back
    /// into (`SelectionString`, `ResObjectString`). Zero disables the reserve.
    pub fn with_output_string_capacity(mut self, capacity: usize) -> Self {
        self.output_string_capacity = capacity;
        self
    }

    pub fn build(self) -> Marshaller {
        Marshaller {
            overlength: self.overlength,
            output_string_capacity: self.output_string_capacity,
        }
    }
}
