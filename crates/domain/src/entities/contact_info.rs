//! ContactInfo entity - owned 1:1 by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::ContactInfoId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub id: Option<ContactInfoId>,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn new(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            title: title.into(),
            created_at: now,
            email: None,
            phone: None,
            address: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl_entity!(ContactInfo, ContactInfoId);
