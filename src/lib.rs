// Module naming follows project convention (MQOD = MQ Object Descriptor)
#[allow(non_snake_case)]
pub mod MQOD {
    pub mod Wire {
        pub mod Wire;
        pub mod Wire_impl;
        pub mod layout;
        mod debug;
        pub use layout::{MQCHARV, MQOD}; // re-export for stable path
        pub use Wire::WireRecord;
    }
    pub mod Structs {
        pub mod Descriptor_Structs;
        pub use Descriptor_Structs::{Field, ObjectDescriptor, ObjectType}; // re-export for stable path
    }

    mod builder;
    mod marshaller;

    pub use builder::MarshallerBuilder;
    pub use marshaller::{decode, decode_into, encode, with_wire_record, Marshaller};
}
#[allow(non_snake_case)]
pub mod Core {
    pub mod constants;
    pub mod error;
    pub mod strings;
    pub use error::{MarshalError, Result};
    pub use strings::OverlengthPolicy;
}
#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}

pub mod ffi;
