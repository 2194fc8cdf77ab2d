//! `AccessControlPolicy` document
//! <https://docs.aws.amazon.com/AmazonS3/latest/API/API_AccessControlPolicy.html>

use anyhow::Result;
use serde::de::{Deserializer, Error};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Well-known group, every request including anonymous ones
pub const ALL_USERS_URI: &str = "http://acs.amazonaws.com/groups/global/AllUsers";

/// Well-known group, any signed request
pub const AUTHENTICATED_USERS_URI: &str =
    "http://acs.amazonaws.com/groups/global/AuthenticatedUsers";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAclError {
    #[error("invalid permission: {0}, expected READ, WRITE, READ_ACP, WRITE_ACP or FULL_CONTROL")]
    Permission(String),
    #[error("invalid grantee type: {0}")]
    GranteeType(String),
    #[error("invalid canned ACL: {0}")]
    CannedAcl(String),
    #[error("invalid grant: {0}, expected PERMISSION:id=<id>, PERMISSION:uri=<uri> or PERMISSION:emailAddress=<email>")]
    Grant(String),
}

/// Owner of the bucket or object
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Owner {
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl Owner {
    #[must_use]
    pub fn new(id: &str, display_name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GranteeType {
    #[default]
    CanonicalUser,
    AmazonCustomerByEmail,
    Group,
}

impl GranteeType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CanonicalUser => "CanonicalUser",
            Self::AmazonCustomerByEmail => "AmazonCustomerByEmail",
            Self::Group => "Group",
        }
    }
}

impl FromStr for GranteeType {
    type Err = ParseAclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CanonicalUser" => Ok(Self::CanonicalUser),
            "AmazonCustomerByEmail" => Ok(Self::AmazonCustomerByEmail),
            "Group" => Ok(Self::Group),
            _ => Err(ParseAclError::GranteeType(s.to_string())),
        }
    }
}

impl Serialize for GranteeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GranteeType {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// The principal receiving a permission.
///
/// The same type is used to read and write the document, only the name of the
/// `xsi:type` attribute differs: it is written qualified and read by its local
/// name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grantee {
    #[serde(rename = "@xmlns:xsi", default = "xsi_namespace")]
    pub xmlns_xsi: String,
    #[serde(
        rename(serialize = "@xsi:type", deserialize = "@type"),
        alias = "@xsi:type",
        default
    )]
    pub grantee_type: GranteeType,
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "DisplayName", skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "URI", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(rename = "EmailAddress", skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
}

fn xsi_namespace() -> String {
    XSI_NAMESPACE.to_string()
}

impl Grantee {
    fn new(grantee_type: GranteeType) -> Self {
        Self {
            xmlns_xsi: xsi_namespace(),
            grantee_type,
            id: None,
            display_name: None,
            uri: None,
            email_address: None,
        }
    }

    #[must_use]
    pub fn canonical_user(id: &str, display_name: Option<&str>) -> Self {
        Self {
            id: Some(id.to_string()),
            display_name: display_name.map(ToString::to_string),
            ..Self::new(GranteeType::CanonicalUser)
        }
    }

    #[must_use]
    pub fn group(uri: &str) -> Self {
        Self {
            uri: Some(uri.to_string()),
            ..Self::new(GranteeType::Group)
        }
    }

    #[must_use]
    pub fn email(email_address: &str) -> Self {
        Self {
            email_address: Some(email_address.to_string()),
            ..Self::new(GranteeType::AmazonCustomerByEmail)
        }
    }

    /// `true` when the grantee has no URI or an empty one
    #[must_use]
    pub fn has_no_uri(&self) -> bool {
        self.uri.as_deref().is_none_or(str::is_empty)
    }

    /// `true` when the grantee is the well-known group `uri`
    #[must_use]
    pub fn is_group(&self, uri: &str) -> bool {
        self.uri.as_deref() == Some(uri)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    Read,
    Write,
    ReadAcp,
    WriteAcp,
    FullControl,
}

impl Permission {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::ReadAcp => "READ_ACP",
            Self::WriteAcp => "WRITE_ACP",
            Self::FullControl => "FULL_CONTROL",
        }
    }

    /// `x-amz-grant-*` header carrying grantees of this permission
    #[must_use]
    pub const fn grant_header(&self) -> &'static str {
        match self {
            Self::Read => "x-amz-grant-read",
            Self::Write => "x-amz-grant-write",
            Self::ReadAcp => "x-amz-grant-read-acp",
            Self::WriteAcp => "x-amz-grant-write-acp",
            Self::FullControl => "x-amz-grant-full-control",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = ParseAclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "READ" => Ok(Self::Read),
            "WRITE" => Ok(Self::Write),
            "READ_ACP" => Ok(Self::ReadAcp),
            "WRITE_ACP" => Ok(Self::WriteAcp),
            "FULL_CONTROL" => Ok(Self::FullControl),
            _ => Err(ParseAclError::Permission(s.to_string())),
        }
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    #[serde(rename = "Grantee")]
    pub grantee: Grantee,
    #[serde(rename = "Permission")]
    pub permission: Permission,
}

impl Grant {
    #[must_use]
    pub const fn new(grantee: Grantee, permission: Permission) -> Self {
        Self {
            grantee,
            permission,
        }
    }
}

// PERMISSION:id=<id>, PERMISSION:uri=<uri> or PERMISSION:emailAddress=<email>, the same
// grantee syntax the x-amz-grant-* headers use
impl FromStr for Grant {
    type Err = ParseAclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (permission, grantee) = s
            .split_once(':')
            .ok_or_else(|| ParseAclError::Grant(s.to_string()))?;

        let permission = permission.trim().to_ascii_uppercase().parse::<Permission>()?;

        let grantee = match grantee.trim().split_once('=') {
            Some(("id", id)) if !id.is_empty() => Grantee::canonical_user(id, None),
            Some(("uri", uri)) if !uri.is_empty() => Grantee::group(uri),
            Some(("emailAddress", email)) if !email.is_empty() => Grantee::email(email),
            _ => return Err(ParseAclError::Grant(s.to_string())),
        };

        Ok(Self::new(grantee, permission))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlList {
    #[serde(rename = "Grant", default)]
    pub grants: Vec<Grant>,
}

/// Owner and ordered grants of a bucket or object
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessControlPolicy {
    #[serde(rename = "Owner", default)]
    pub owner: Owner,
    #[serde(rename = "AccessControlList", default)]
    pub access_control_list: AccessControlList,
}

impl AccessControlPolicy {
    #[must_use]
    pub const fn new(owner: Owner, grants: Vec<Grant>) -> Self {
        Self {
            owner,
            access_control_list: AccessControlList { grants },
        }
    }

    #[must_use]
    pub fn grants(&self) -> &[Grant] {
        &self.access_control_list.grants
    }

    /// # Errors
    ///
    /// Will return `Err` if the document is not a valid `AccessControlPolicy`
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(quick_xml::de::from_str(xml)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the policy can not be serialized
    pub fn to_xml(&self) -> Result<String> {
        Ok(quick_xml::se::to_string_with_root("AccessControlPolicy", self)?)
    }
}
