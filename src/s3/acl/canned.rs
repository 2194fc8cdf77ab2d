//! Canned ACLs
//! <https://docs.aws.amazon.com/AmazonS3/latest/userguide/acl-overview.html#canned-acl>

use crate::s3::acl::policy::{
    ALL_USERS_URI, AUTHENTICATED_USERS_URI, AccessControlPolicy, ParseAclError, Permission,
};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CannedAcl {
    Private,
    PublicRead,
    PublicReadWrite,
    AuthenticatedRead,
    AwsExecRead,
    BucketOwnerRead,
    BucketOwnerFullControl,
}

impl CannedAcl {
    pub const ALL: [Self; 7] = [
        Self::Private,
        Self::PublicRead,
        Self::PublicReadWrite,
        Self::AuthenticatedRead,
        Self::AwsExecRead,
        Self::BucketOwnerRead,
        Self::BucketOwnerFullControl,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "public-read",
            Self::PublicReadWrite => "public-read-write",
            Self::AuthenticatedRead => "authenticated-read",
            Self::AwsExecRead => "aws-exec-read",
            Self::BucketOwnerRead => "bucket-owner-read",
            Self::BucketOwnerFullControl => "bucket-owner-full-control",
        }
    }
}

impl fmt::Display for CannedAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CannedAcl {
    type Err = ParseAclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|acl| acl.as_str() == s)
            .ok_or_else(|| ParseAclError::CannedAcl(s.to_string()))
    }
}

impl AccessControlPolicy {
    /// Infers the canned ACL the grants were most likely created with.
    ///
    /// Only these patterns are recognized, first match wins:
    ///
    /// * one grant without URI and `FULL_CONTROL`: `private`
    /// * two grants, any `AuthenticatedUsers` `READ`: `authenticated-read`, any `AllUsers`
    ///   `READ`: `public-read`, any `READ` to the owner ID: `bucket-owner-read`
    /// * three grants, any `AllUsers` `WRITE`: `public-read-write`
    ///
    /// Anything else returns `None`, use [`Self::grant_headers`] instead.
    #[must_use]
    pub fn canned_acl(&self) -> Option<CannedAcl> {
        match self.grants() {
            [grant] => (grant.grantee.has_no_uri() && grant.permission == Permission::FullControl)
                .then_some(CannedAcl::Private),
            grants @ [_, _] => grants.iter().find_map(|grant| {
                if grant.grantee.is_group(AUTHENTICATED_USERS_URI)
                    && grant.permission == Permission::Read
                {
                    Some(CannedAcl::AuthenticatedRead)
                } else if grant.grantee.is_group(ALL_USERS_URI)
                    && grant.permission == Permission::Read
                {
                    Some(CannedAcl::PublicRead)
                } else if grant.permission == Permission::Read
                    && grant.grantee.id.as_deref().unwrap_or_default() == self.owner.id
                {
                    Some(CannedAcl::BucketOwnerRead)
                } else {
                    None
                }
            }),
            grants @ [_, _, _] => grants
                .iter()
                .any(|grant| {
                    grant.grantee.is_group(ALL_USERS_URI) && grant.permission == Permission::Write
                })
                .then_some(CannedAcl::PublicReadWrite),
            _ => None,
        }
    }

    /// `x-amz-grant-*` headers for the grants, one `id=<grantee id>` per grant in document
    /// order
    #[must_use]
    pub fn grant_headers(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut headers: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();

        for grant in self.grants() {
            headers
                .entry(grant.permission.grant_header())
                .or_default()
                .push(format!(
                    "id={}",
                    grant.grantee.id.as_deref().unwrap_or_default()
                ));
        }

        headers
    }
}
