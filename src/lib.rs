//! # s3acl
//!
//! Read and write Access Control Lists of S3 buckets and objects.
//!
//! The library side lives in [`s3`]: an [`s3::S3`] handle signs and sends the
//! `?acl` requests, [`s3::acl`] holds the `AccessControlPolicy` document and the
//! canned ACL inference. The `s3acl` binary is a thin front end in [`cli`].

pub mod cli;
pub mod s3;
