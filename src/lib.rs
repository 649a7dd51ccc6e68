//! # Simple and type-safe client for the DNSPod API.
//!
//! Implements a blocking client for the [DNSPod API], both the China version
//! and the international one. Requests are sent as form fields and the JSON
//! responses decoded into typed structures, whether DNSPod sends their
//! numeric fields as numbers or as strings.
//!
//! ## Examples
//!
//! ```no_run
//! use dnspod::{Client, Record};
//!
//! let client = Client::builder()
//!     .login_token("<ID>,<TOKEN>")
//!     .build()
//!     .unwrap();
//!
//! let domains = client.domains().list().unwrap().value;
//!
//! let record = Record {
//!     name: "www".to_string(),
//!     type_: "A".to_string(),
//!     line: "默认".to_string(),
//!     value: "127.0.0.1".to_string(),
//!     ..Default::default()
//! };
//! let created = client.records().create(&domains[0].id, &record).unwrap();
//! ```
//!
//! ## Errors
//!
//! A call fails in one of three ways, which [ClientError] keeps apart:
//! the request itself failed ([ClientError::is_transport]), the response
//! couldn't be decoded ([ClientError::is_decode]), or DNSPod reported a
//! failure in the response's status ([ClientError::is_status]).
//!
//! [DNSPod API]: https://docs.dnspod.com/api/

mod client;
pub mod domain;
mod envelope;
mod errors;
mod numeric;
mod pagination;
mod payload;
pub mod record;
pub mod user;

pub use client::*;
pub use domain::{CreatedDomain, Domain, DomainInfo, Domains, Grade, Line};
pub use envelope::{Envelope, Status};
pub use errors::*;
pub use numeric::Numeric;
pub use pagination::DEFAULT_PAGE_SIZE;
pub use payload::CommonParams;
pub(crate) use payload::Payload;
pub use record::{Record, RecordList, RecordListInfo, RecordModify, Records};
pub use user::{Agent, User, UserInfo, Users};
