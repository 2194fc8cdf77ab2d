use crate::s3::acl::{AccessControlPolicy, Grant, Owner};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Object metadata as returned by `HeadObject`, extended with the object ACL
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectInfo {
    pub key: String,
    pub size: Option<u64>,
    pub etag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub content_type: Option<String>,
    pub version_id: Option<String>,
    pub owner: Owner,
    pub grants: Vec<Grant>,
    // response headers, lowercase names
    pub metadata: BTreeMap<String, Vec<String>>,
}

impl ObjectInfo {
    /// Builds the object info from the `HeadObject` response headers, single valued fields
    /// take the first value
    #[must_use]
    pub fn from_headers(key: &str, headers: &BTreeMap<String, Vec<String>>) -> Self {
        let first = |name: &str| headers.get(name).and_then(|v| v.first());
        let header = |name: &str| first(name).map(|v| v.trim_matches('"').to_string());

        let last_modified = first("last-modified").and_then(|v| {
            DateTime::parse_from_rfc2822(v)
                .map(|d| d.with_timezone(&Utc))
                .map_err(|e| log::warn!("could not parse last-modified {v}: {e}"))
                .ok()
        });

        Self {
            key: key.to_string(),
            size: first("content-length").and_then(|v| v.parse().ok()),
            etag: header("etag"),
            last_modified,
            content_type: header("content-type"),
            version_id: header("x-amz-version-id"),
            metadata: headers
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.clone()))
                .collect(),
            ..Self::default()
        }
    }

    /// Appends a value to the metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }

    /// Replaces all the values of the metadata entry
    pub fn set_metadata(&mut self, key: &str, values: Vec<String>) {
        self.metadata.insert(key.to_ascii_lowercase(), values);
    }

    /// Merges the ACL into the object info: the owner is replaced, the grants are appended and
    /// either the inferred `x-amz-acl` is added or the `x-amz-grant-*` entries are set.
    pub fn merge_acl(&mut self, policy: AccessControlPolicy) {
        let canned_acl = policy.canned_acl();
        let grant_headers = policy.grant_headers();

        let AccessControlPolicy {
            owner,
            access_control_list,
        } = policy;

        self.owner.id = owner.id;
        self.owner.display_name = owner.display_name;
        self.grants.extend(access_control_list.grants);

        if let Some(acl) = canned_acl {
            self.add_metadata("x-amz-acl", acl.as_str());
            return;
        }

        for (header, values) in grant_headers {
            self.set_metadata(header, values);
        }
    }
}
