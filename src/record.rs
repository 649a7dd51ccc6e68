//! DNS records.

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::envelope::NoPayload;
use crate::numeric::{
    deserialize_null_default, deserialize_to_option_i64, deserialize_to_string,
};
use crate::pagination::{self, DEFAULT_PAGE_SIZE, Page};
use crate::{ApiResponse, Client, ClientError, Method, Payload};

/// A DNS record.
///
/// When creating or updating a record, only the non-empty attributes are sent.
/// `id`, `enabled`, `monitor_status` and `updated_on` are only filled in by
/// the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub line: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub line_id: String,
    #[serde(rename = "type", deserialize_with = "deserialize_null_default")]
    pub type_: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub ttl: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub value: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub mx: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub enabled: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub monitor_status: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub remark: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub updated_on: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub use_aqb: String,
    #[serde(
        deserialize_with = "deserialize_to_option_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<i64>,
}

impl Record {
    /// Adds the attributes of the record to the payload, skipping empty ones.
    fn add_to(&self, payload: Payload) -> Payload {
        payload
            .add_if_not_empty("sub_domain", &self.name)
            .add_if_not_empty("record_type", &self.type_)
            .add_if_not_empty("record_line", &self.line)
            .add_if_not_empty("record_line_id", &self.line_id)
            .add_if_not_empty("value", &self.value)
            .add_if_not_empty("mx", &self.mx)
            .add_if_not_empty("ttl", &self.ttl)
            .add_if_not_empty("status", &self.status)
            .add_if_some("weight", self.weight)
    }
}

/// The record returned by `Record.Modify`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordModify {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub value: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
}

/// Counters returned alongside a record listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordListInfo {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub sub_domains: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub record_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub records_num: String,
}

/// The records of a domain, along with the domain itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordList {
    pub domain: Domain,
    pub info: RecordListInfo,
    pub records: Vec<Record>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordListPage {
    domain: Domain,
    info: RecordListInfo,
    records: Vec<Record>,
}

impl Page for RecordListPage {
    type Item = Record;

    fn total(&self) -> &str {
        &self.info.record_total
    }

    fn into_items(self) -> Vec<Record> {
        self.records
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordBody {
    record: Record,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordModifyBody {
    record: RecordModify,
}

/// Record methods of the DNSPod API.
pub struct Records<'a> {
    client: &'a Client,
}

impl<'a> Records<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the records of a domain, optionally only those of `sub_domain`.
    pub fn list(
        &self,
        domain_id: &str,
        sub_domain: &str,
    ) -> Result<ApiResponse<RecordList>, ClientError> {
        self.list_with_page_size(domain_id, sub_domain, DEFAULT_PAGE_SIZE)
    }

    /// Lists the records of a domain, `page_size` records per request.
    pub fn list_with_page_size(
        &self,
        domain_id: &str,
        sub_domain: &str,
        page_size: u32,
    ) -> Result<ApiResponse<RecordList>, ClientError> {
        let mut domain = Domain::default();
        let mut info = RecordListInfo::default();

        let base = self
            .client
            .payload()
            .add("domain_id", domain_id)
            .add_if_not_empty("sub_domain", sub_domain);
        let (records, meta) = pagination::collect_pages(page_size, |offset, length| {
            let payload = base.clone().set("length", length).set("offset", offset);
            let resp = self
                .client
                .call::<RecordListPage>(Method::RecordList, payload)?;
            domain = resp.value.domain.clone();
            info = resp.value.info.clone();
            Ok((resp.value, resp.meta))
        })?;

        Ok(ApiResponse {
            value: RecordList {
                domain,
                info,
                records,
            },
            meta,
        })
    }

    pub fn create(
        &self,
        domain_id: &str,
        record: &Record,
    ) -> Result<ApiResponse<Record>, ClientError> {
        let payload = record.add_to(self.client.payload().add("domain_id", domain_id));

        Ok(self
            .client
            .call::<RecordBody>(Method::RecordCreate, payload)?
            .map(|body| body.record))
    }

    pub fn get(&self, domain_id: &str, record_id: &str) -> Result<ApiResponse<Record>, ClientError> {
        let payload = self
            .client
            .payload()
            .add("domain_id", domain_id)
            .add("record_id", record_id);

        Ok(self
            .client
            .call::<RecordBody>(Method::RecordInfo, payload)?
            .map(|body| body.record))
    }

    /// Updates the non-empty attributes of `record` on the record `record_id`.
    pub fn update(
        &self,
        domain_id: &str,
        record_id: &str,
        record: &Record,
    ) -> Result<ApiResponse<RecordModify>, ClientError> {
        let payload = record.add_to(
            self.client
                .payload()
                .add("domain_id", domain_id)
                .add("record_id", record_id),
        );

        Ok(self
            .client
            .call::<RecordModifyBody>(Method::RecordModify, payload)?
            .map(|body| body.record))
    }

    pub fn delete(&self, domain_id: &str, record_id: &str) -> Result<ApiResponse<()>, ClientError> {
        let payload = self
            .client
            .payload()
            .add("domain_id", domain_id)
            .add("record_id", record_id);

        Ok(self
            .client
            .call::<NoPayload>(Method::RecordRemove, payload)?
            .map(|_| ()))
    }
}

#[cfg(test)]
mod tests;
