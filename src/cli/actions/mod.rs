use crate::s3::acl::{CannedAcl, Grant};
use std::path::PathBuf;

pub mod acl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GetAcl {
        key: Option<String>,
        info: bool,
    },
    PutAcl {
        key: Option<String>,
        policy: PolicySource,
    },
}

/// Where the ACL to put comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicySource {
    Canned(CannedAcl),
    File(PathBuf),
    Grants { owner: String, grants: Vec<Grant> },
}
