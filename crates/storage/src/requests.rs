#![forbid(unsafe_code)]

use sg_core::model::Status;

#[derive(Clone, Debug, PartialEq)]
pub struct InsertStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub sgpa: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Blacklisted,
}

impl StatusFilter {
    pub fn status(self) -> Option<Status> {
        match self {
            Self::All => None,
            Self::Active => Some(Status::Active),
            Self::Blacklisted => Some(Status::Blacklisted),
        }
    }

    pub(crate) fn sql_param(self) -> Option<&'static str> {
        self.status().map(Status::as_str)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StudentOrder {
    #[default]
    Insertion,
    SgpaDesc,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListStudentsRequest {
    pub filter: StatusFilter,
    pub order: StudentOrder,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupOrder {
    #[default]
    SgpaDesc,
    Insertion,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListGroupsRequest {
    pub filter: StatusFilter,
    pub order: GroupOrder,
}
