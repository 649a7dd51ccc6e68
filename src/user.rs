//! Account details.

use serde::{Deserialize, Serialize};

use crate::numeric::{
    deserialize_null_default, deserialize_to_option_i64, deserialize_to_string,
};
use crate::{ApiResponse, Client, ClientError, Method};

/// Grade reported for international accounts that don't report one.
pub const INTERNATIONAL_DEFAULT_GRADE: &str = "DP_Free";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub real_name: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_type: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub telephone: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub im: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub nick: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub email: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub status: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub email_verified: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub telephone_verified: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub weixin_binded: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub agent_pending: bool,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub balance: Option<i64>,
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub smsbalance: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_grade: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    #[serde(deserialize_with = "deserialize_to_string")]
    pub discount: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub points: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub balance_limit: String,
    #[serde(deserialize_with = "deserialize_to_string")]
    pub users: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    pub user: User,
    pub agent: Agent,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserBody {
    info: UserInfo,
}

/// Account methods of the DNSPod API.
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches the details of the account the login token belongs to.
    ///
    /// The international API may leave the grade empty, in which case it is
    /// reported as [INTERNATIONAL_DEFAULT_GRADE].
    pub fn detail(&self) -> Result<ApiResponse<UserInfo>, ClientError> {
        let payload = self.client.payload();
        let is_international = self.client.params().is_international;

        Ok(self
            .client
            .call::<UserBody>(Method::UserDetail, payload)?
            .map(|body| {
                let mut info = body.info;
                if is_international && info.user.user_grade.is_empty() {
                    info.user.user_grade = INTERNATIONAL_DEFAULT_GRADE.to_string();
                }
                info
            }))
    }
}
