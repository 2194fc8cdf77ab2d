//! Bucket and object ACLs
//!
//! Each operation is a single request on the bucket of the `S3` handle, non-success
//! responses are returned as [`ResponseError`](crate::s3::responses::ResponseError).

mod canned;
mod policy;

pub use self::canned::CannedAcl;
pub use self::policy::{
    ALL_USERS_URI, AUTHENTICATED_USERS_URI, AccessControlList, AccessControlPolicy, Grant,
    Grantee, GranteeType, Owner, ParseAclError, Permission, XSI_NAMESPACE,
};

use crate::s3::{
    S3,
    actions::{AclBody, GetBucketAcl, GetObjectAcl, HeadObject, PutBucketAcl, PutObjectAcl},
    object_info::ObjectInfo,
};
use anyhow::Result;

impl S3 {
    /// Object info from `HeadObject` merged with the object ACL, the ACL is fetched first
    /// so a failure leaves nothing half built.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any of the requests fails or the ACL can not be decoded
    pub async fn get_object_acl(&self, key: &str) -> Result<ObjectInfo> {
        let policy = GetObjectAcl::new(key).policy(self).await?;

        log::debug!("object {key} policy: {policy:#?}");

        let headers = HeadObject::new(key).request(self).await?;

        let mut info = ObjectInfo::from_headers(key, &headers);
        info.merge_acl(policy);

        Ok(info)
    }

    /// Raw `AccessControlPolicy` XML of the object
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn get_object_acl_string(&self, key: &str) -> Result<String> {
        GetObjectAcl::new(key).request(self).await
    }

    /// Raw `AccessControlPolicy` XML of the bucket
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn get_bucket_acl_string(&self) -> Result<String> {
        GetBucketAcl::new().request(self).await
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails or the ACL can not be decoded
    pub async fn get_bucket_acl(&self) -> Result<AccessControlPolicy> {
        GetBucketAcl::new().policy(self).await
    }

    /// # Errors
    ///
    /// Will return `Err` if the policy can not be serialized or the request fails
    pub async fn put_object_acl(&self, key: &str, policy: &AccessControlPolicy) -> Result<()> {
        PutObjectAcl::new(key, AclBody::from_policy(policy)?)
            .request(self)
            .await
    }

    /// Sends the XML as is, it is not validated
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn put_object_acl_string(&self, key: &str, xml: &str) -> Result<()> {
        PutObjectAcl::new(key, AclBody::Xml(xml.to_string()))
            .request(self)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn put_object_canned_acl(&self, key: &str, acl: CannedAcl) -> Result<()> {
        PutObjectAcl::new(key, AclBody::Canned(acl))
            .request(self)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the policy can not be serialized or the request fails
    pub async fn put_bucket_acl(&self, policy: &AccessControlPolicy) -> Result<()> {
        PutBucketAcl::new(AclBody::from_policy(policy)?)
            .request(self)
            .await
    }

    /// Sends the XML as is, it is not validated
    ///
    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn put_bucket_acl_string(&self, xml: &str) -> Result<()> {
        PutBucketAcl::new(AclBody::Xml(xml.to_string()))
            .request(self)
            .await
    }

    /// # Errors
    ///
    /// Will return `Err` if the request fails
    pub async fn put_bucket_canned_acl(&self, acl: CannedAcl) -> Result<()> {
        PutBucketAcl::new(AclBody::Canned(acl)).request(self).await
    }
}
