// Caller-facing object descriptor and the enums that describe its fields.

use crate::Core::constants::*;
use std::fmt;

/// MQOT object type. `Other` keeps decoding total for values this crate
/// does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectType {
    None,
    #[default]
    Queue,
    Namelist,
    Process,
    StorageClass,
    QueueManager,
    Channel,
    AuthInfo,
    Topic,
    CommInfo,
    CfStruc,
    Listener,
    Service,
    Other(i32),
}

impl From<i32> for ObjectType {
    fn from(value: i32) -> Self {
        match value {
            MQOT_NONE => ObjectType::None,
            MQOT_Q => ObjectType::Queue,
            MQOT_NAMELIST => ObjectType::Namelist,
            MQOT_PROCESS => ObjectType::Process,
            MQOT_STORAGE_CLASS => ObjectType::StorageClass,
            MQOT_Q_MGR => ObjectType::QueueManager,
            MQOT_CHANNEL => ObjectType::Channel,
            MQOT_AUTH_INFO => ObjectType::AuthInfo,
            MQOT_TOPIC => ObjectType::Topic,
            MQOT_COMM_INFO => ObjectType::CommInfo,
            MQOT_CF_STRUC => ObjectType::CfStruc,
            MQOT_LISTENER => ObjectType::Listener,
            MQOT_SERVICE => ObjectType::Service,
            other => ObjectType::Other(other),
        }
    }
}

impl From<ObjectType> for i32 {
    fn from(value: ObjectType) -> Self {
        match value {
            ObjectType::None => MQOT_NONE,
            ObjectType::Queue => MQOT_Q,
            ObjectType::Namelist => MQOT_NAMELIST,
            ObjectType::Process => MQOT_PROCESS,
            ObjectType::StorageClass => MQOT_STORAGE_CLASS,
            ObjectType::QueueManager => MQOT_Q_MGR,
            ObjectType::Channel => MQOT_CHANNEL,
            ObjectType::AuthInfo => MQOT_AUTH_INFO,
            ObjectType::Topic => MQOT_TOPIC,
            ObjectType::CommInfo => MQOT_COMM_INFO,
            ObjectType::CfStruc => MQOT_CF_STRUC,
            ObjectType::Listener => MQOT_LISTENER,
            ObjectType::Service => MQOT_SERVICE,
            ObjectType::Other(v) => v,
        }
    }
}

/// String-valued fields of the descriptor.
///
/// The discriminants are the field ids used by the C ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Field {
    ObjectName = 1,
    ObjectQMgrName = 2,
    DynamicQName = 3,
    AlternateUserId = 4,
    ResolvedQName = 5,
    ResolvedQMgrName = 6,
    ObjectString = 7,
    SelectionString = 8,
    ResObjectString = 9,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::ObjectName,
        Field::ObjectQMgrName,
        Field::DynamicQName,
        Field::AlternateUserId,
        Field::ResolvedQName,
        Field::ResolvedQMgrName,
        Field::ObjectString,
        Field::SelectionString,
        Field::ResObjectString,
    ];

    /// Width of the fixed MQCHAR field, or `None` for MQCHARV fields.
    pub fn fixed_width(self) -> Option<usize> {
        match self {
            Field::ObjectName | Field::DynamicQName | Field::ResolvedQName => {
                Some(MQ_Q_NAME_LENGTH)
            }
            Field::ObjectQMgrName | Field::ResolvedQMgrName => Some(MQ_Q_MGR_NAME_LENGTH),
            Field::AlternateUserId => Some(MQ_USER_ID_LENGTH),
            Field::ObjectString | Field::SelectionString | Field::ResObjectString => None,
        }
    }

    /// MQCHARV fields the native call may write a value back into.
    pub fn is_output_capable(self) -> bool {
        matches!(self, Field::SelectionString | Field::ResObjectString)
    }

    pub fn from_id(id: i32) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| *f as i32 == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::ObjectName => "ObjectName",
            Field::ObjectQMgrName => "ObjectQMgrName",
            Field::DynamicQName => "DynamicQName",
            Field::AlternateUserId => "AlternateUserId",
            Field::ResolvedQName => "ResolvedQName",
            Field::ResolvedQMgrName => "ResolvedQMgrName",
            Field::ObjectString => "ObjectString",
            Field::SelectionString => "SelectionString",
            Field::ResObjectString => "ResObjectString",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fields needed to identify an object to an MQI call.
///
/// `resolved_q_name`, `resolved_q_mgr_name` and `resolved_type` are filled
/// in by the native call; values set here are not sent.
/// Distribution-list fields are deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDescriptor {
    pub object_type: ObjectType,
    pub object_name: String,
    pub object_q_mgr_name: String,
    pub dynamic_q_name: String,
    pub alternate_user_id: String,
    pub alternate_security_id: Vec<u8>,
    pub resolved_q_name: String,
    pub resolved_q_mgr_name: String,
    pub object_string: String,
    pub selection_string: String,
    pub res_object_string: String,
    pub resolved_type: ObjectType,
}

impl Default for ObjectDescriptor {
    fn default() -> Self {
        Self {
            object_type: ObjectType::Queue,
            object_name: String::new(),
            object_q_mgr_name: String::new(),
            dynamic_q_name: DEFAULT_DYNAMIC_Q_NAME.to_string(),
            alternate_user_id: String::new(),
            alternate_security_id: vec![0; MQ_SECURITY_ID_LENGTH],
            resolved_q_name: String::new(),
            resolved_q_mgr_name: String::new(),
            object_string: String::new(),
            selection_string: String::new(),
            res_object_string: String::new(),
            resolved_type: ObjectType::None,
        }
    }
}

impl ObjectDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_object_type(mut self, object_type: ObjectType) -> Self {
        self.object_type = object_type;
        self
    }

    pub fn with_object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = name.into();
        self
    }

    pub fn with_object_q_mgr_name(mut self, name: impl Into<String>) -> Self {
        self.object_q_mgr_name = name.into();
        self
    }

    pub fn with_dynamic_q_name(mut self, template: impl Into<String>) -> Self {
        self.dynamic_q_name = template.into();
        self
    }

    pub fn with_alternate_user_id(mut self, user: impl Into<String>) -> Self {
        self.alternate_user_id = user.into();
        self
    }

    pub fn with_alternate_security_id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.alternate_security_id = id.into();
        self
    }

    pub fn with_object_string(mut self, s: impl Into<String>) -> Self {
        self.object_string = s.into();
        self
    }

    pub fn with_selection_string(mut self, s: impl Into<String>) -> Self {
        self.selection_string = s.into();
        self
    }

    /// Borrow a string field by name.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::ObjectName => &self.object_name,
            Field::ObjectQMgrName => &self.object_q_mgr_name,
            Field::DynamicQName => &self.dynamic_q_name,
            Field::AlternateUserId => &self.alternate_user_id,
            Field::ResolvedQName => &self.resolved_q_name,
            Field::ResolvedQMgrName => &self.resolved_q_mgr_name,
            Field::ObjectString => &self.object_string,
            Field::SelectionString => &self.selection_string,
            Field::ResObjectString => &self.res_object_string,
        }
    }

    /// Mutable access to a string field by name.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::ObjectName => &mut self.object_name,
            Field::ObjectQMgrName => &mut self.object_q_mgr_name,
            Field::DynamicQName => &mut self.dynamic_q_name,
            Field::AlternateUserId => &mut self.alternate_user_id,
            Field::ResolvedQName => &mut self.resolved_q_name,
            Field::ResolvedQMgrName => &mut self.resolved_q_mgr_name,
            Field::ObjectString => &mut self.object_string,
            Field::SelectionString => &mut self.selection_string,
            Field::ResObjectString => &mut self.res_object_string,
        }
    }
}
