//! CLI response types returned as JSON by `avp` commands.
//!
//! These structs define the shape of output for the composite views
//! (`avp dashboard`, `avp admin overview`, `avp info`). Single-entity
//! commands output the entity itself; small acks are defined next to their
//! handlers.

use serde::{Deserialize, Serialize};

use crate::entities::{Payment, Project, User};
use crate::enums::Technology;

/// Response from `avp dashboard`: the student view on mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardView {
    pub student: User,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

/// Response from `avp admin overview`: every collection, unfiltered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminOverview {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

/// One service offering shown by `avp info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub title: String,
    pub summary: String,
}

/// Contact and manual-payment details shown by `avp info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub upi_id: String,
    pub payment_note: String,
}

/// Response from `avp info`: the marketing-page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteInfo {
    pub about: String,
    pub services: Vec<ServiceInfo>,
    pub technologies: Vec<Technology>,
    pub contact: ContactInfo,
}
