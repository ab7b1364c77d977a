use serde::{Deserialize, Serialize};

use super::MemberId;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
}
