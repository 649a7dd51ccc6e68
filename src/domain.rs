//! Domains and record lines.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString, IntoStaticStr};

use crate::envelope::NoPayload;
use crate::numeric::{Numeric, deserialize_null_default, deserialize_to_string};
use crate::pagination::{self, DEFAULT_PAGE_SIZE, Page};
use crate::{ApiResponse, Client, ClientError, DomainError, Method};

/// Counters returned alongside a domain listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub domain_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub all_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub mine_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub share_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub vip_total: String,
    #[serde(rename = "ismark_total", deserialize_with = "deserialize_to_string")]
    pub is_mark_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub pause_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub error_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub lock_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub spam_total: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub vip_expire: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub share_out_total: String,
}

/// A domain hosted on DNSPod.
///
/// Only `name`, `group_id` and `is_mark` are sent when creating a domain;
/// the rest is filled in by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub punycode: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub grade: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub grade_title: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub ext_status: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub records: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub group_id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub is_mark: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub remark: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub is_vip: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub searchengine_push: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub user_id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub created_on: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub updated_on: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub ttl: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub cname_speedup: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub owner: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub auth_to_anquanbao: bool,
    #[serde(rename = "dnspod_ns", deserialize_with = "deserialize_null_default")]
    pub name_servers: Vec<String>,
}

/// The domain returned by `Domain.Create`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CreatedDomainWire")]
pub struct CreatedDomain {
    pub id: String,
    pub name: String,
    pub punycode: String,
    pub grade_ns: Vec<String>,
}

/// `Domain.Create` names the domain `domain`, while other methods use `name`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatedDomainWire {
    #[serde(deserialize_with = "deserialize_to_string")]
    id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    domain: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    punycode: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    grade_ns: Vec<String>,
}

impl From<CreatedDomainWire> for CreatedDomain {
    fn from(wire: CreatedDomainWire) -> Self {
        let name = if wire.domain.is_empty() {
            wire.name
        } else {
            wire.domain
        };
        Self {
            id: wire.id,
            name,
            punycode: wire.punycode,
            grade_ns: wire.grade_ns,
        }
    }
}

/// Grade of a domain's plan, which decides the record lines available to it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr,
)]
pub enum Grade {
    #[strum(serialize = "D_Free")]
    DFree,
    #[strum(serialize = "D_Plus")]
    DPlus,
    #[strum(serialize = "D_Extra")]
    DExtra,
    #[strum(serialize = "D_Expert")]
    DExpert,
    #[strum(serialize = "D_Ultra")]
    DUltra,
    #[strum(serialize = "DP_Free")]
    DpFree,
    #[strum(serialize = "DP_Plus")]
    DpPlus,
    #[strum(serialize = "DP_Extra")]
    DpExtra,
    #[strum(serialize = "DP_Expert")]
    DpExpert,
    #[strum(serialize = "DP_Ultra")]
    DpUltra,
    #[strum(serialize = "DPG_Free")]
    DpgFree,
    #[strum(serialize = "DPG_Plus")]
    DpgPlus,
    #[strum(serialize = "DPG_Extra")]
    DpgExtra,
    #[strum(serialize = "DPG_Expert")]
    DpgExpert,
    #[strum(serialize = "DPG_Ultra")]
    DpgUltra,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a grade as DNSPod spells it, e.g. `DP_Free`.
    ///
    /// # Errors
    /// - `InvalidGrade` if the grade isn't one DNSPod knows.
    pub fn parse(grade: &str) -> Result<Self, DomainError> {
        Self::from_str(grade).map_err(|_| DomainError::InvalidGrade(grade.to_string()))
    }
}

/// A record line: a resolution route records can be restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Line {
    pub name: String,
    pub id: String,
}

/// Flattens the line map into lines ordered by their ID.
///
/// IDs are compared as strings, so `"10"` sorts before `"2"`. Lines with equal
/// IDs are ordered by name.
pub(crate) fn sort_lines<I>(line_ids: I) -> Vec<Line>
where
    I: IntoIterator<Item = (String, Numeric)>,
{
    let mut lines: Vec<Line> = line_ids
        .into_iter()
        .map(|(name, id)| Line {
            name,
            id: id.into_string(),
        })
        .collect();
    lines.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.name.cmp(&b.name)));
    lines
}

/// Validates that `name` is a registrable domain name.
fn check_domain_name(name: &str) -> Result<(), DomainError> {
    let parsed = addr::parse_domain_name(name)
        .map_err(|e| DomainError::Invalid(name.to_string(), e.to_string()))?;
    if parsed.root().is_none() {
        return Err(DomainError::MissingRoot(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DomainListPage {
    info: DomainInfo,
    domains: Vec<Domain>,
}

impl Page for DomainListPage {
    type Item = Domain;

    fn total(&self) -> &str {
        &self.info.all_total
    }

    fn into_items(self) -> Vec<Domain> {
        self.domains
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DomainBody {
    domain: Domain,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatedDomainBody {
    domain: CreatedDomain,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LineBody {
    line_ids: HashMap<String, Numeric>,
}

/// Domain methods of the DNSPod API.
pub struct Domains<'a> {
    client: &'a Client,
}

impl<'a> Domains<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every domain of the account, fetching as many pages as needed.
    pub fn list(&self) -> Result<ApiResponse<Vec<Domain>>, ClientError> {
        self.list_with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Lists every domain of the account, `page_size` domains per request.
    pub fn list_with_page_size(
        &self,
        page_size: u32,
    ) -> Result<ApiResponse<Vec<Domain>>, ClientError> {
        let base = self.client.payload();
        let (value, meta) = pagination::collect_pages(page_size, |offset, length| {
            let payload = base.clone().set("length", length).set("offset", offset);
            let resp = self
                .client
                .call::<DomainListPage>(Method::DomainList, payload)?;
            Ok((resp.value, resp.meta))
        })?;

        Ok(ApiResponse { value, meta })
    }

    /// Adds a domain to the account.
    ///
    /// # Errors
    /// - `Domain` if `domain.name` isn't a valid registrable domain name.
    pub fn create(&self, domain: &Domain) -> Result<ApiResponse<CreatedDomain>, ClientError> {
        check_domain_name(&domain.name)?;

        let payload = self
            .client
            .payload()
            .add("domain", &domain.name)
            .add_if_not_empty("group_id", &domain.group_id)
            .add_if_not_empty("is_mark", &domain.is_mark);

        Ok(self
            .client
            .call::<CreatedDomainBody>(Method::DomainCreate, payload)?
            .map(|body| body.domain))
    }

    /// Fetches a domain by its ID.
    pub fn get(&self, domain_id: &str) -> Result<ApiResponse<Domain>, ClientError> {
        let payload = self.client.payload().add("domain_id", domain_id);

        Ok(self
            .client
            .call::<DomainBody>(Method::DomainInfo, payload)?
            .map(|body| body.domain))
    }

    /// Removes a domain from the account.
    pub fn delete(&self, domain_id: &str) -> Result<ApiResponse<()>, ClientError> {
        let payload = self.client.payload().add("domain_id", domain_id);

        Ok(self
            .client
            .call::<NoPayload>(Method::DomainRemove, payload)?
            .map(|_| ()))
    }

    /// Lists the record lines available to domains of the given grade, ordered
    /// by line ID.
    ///
    /// # Errors
    /// - `Domain` if the client targets the international API and `domain` is empty.
    pub fn lines(&self, domain: &str, grade: Grade) -> Result<ApiResponse<Vec<Line>>, ClientError> {
        let mut payload = self.client.payload();
        if self.client.params().is_international {
            if domain.is_empty() {
                return Err(DomainError::MissingDomain.into());
            }
            payload = payload.add("domain", domain);
        }
        let payload = payload.add("domain_grade", grade.as_str());

        Ok(self
            .client
            .call::<LineBody>(Method::RecordLine, payload)?
            .map(|body| sort_lines(body.line_ids)))
    }
}
