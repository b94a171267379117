use avp_core::enums::Technology;
use avp_core::responses::{ContactInfo, ServiceInfo, SiteInfo};

use crate::cli::GlobalFlags;
use crate::output::output;

/// The marketing-page content, as structured data.
#[must_use]
pub fn site_info() -> SiteInfo {
    SiteInfo {
        about: "We help students build impactful final-year projects with clean code, \
                documentation, and real-world guidance. Our team covers ideation to \
                deployment with a focus on quality and timelines."
            .into(),
        services: vec![
            ServiceInfo {
                title: "Final Year Projects".into(),
                summary: "End-to-end guidance with code, report, and PPT.".into(),
            },
            ServiceInfo {
                title: "Custom Development".into(),
                summary: "Tailored solutions for web, mobile, and embedded.".into(),
            },
        ],
        technologies: Technology::ALL.to_vec(),
        contact: ContactInfo {
            email: "support@avtechsolutions.com".into(),
            phone: "+91 98765 43210".into(),
            location: "Hyderabad, India".into(),
            upi_id: "avtechsolutions@upi".into(),
            payment_note: "Use this for manual payments. Upload proof from your dashboard.".into(),
        },
    }
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&site_info(), flags.format)
}

#[cfg(test)]
mod tests {
    use super::site_info;
    use avp_core::enums::Technology;

    #[test]
    fn lists_every_technology_track() {
        let info = site_info();
        assert_eq!(info.technologies.len(), Technology::ALL.len());
        assert!(info.technologies.contains(&Technology::AiMl));
    }

    #[test]
    fn carries_manual_payment_details() {
        let info = site_info();
        assert_eq!(info.contact.upi_id, "avtechsolutions@upi");
        assert!(!info.services.is_empty());
    }
}
