use serde::Serialize;

/// Clinic identity and location details shown in the header, map panel, and
/// footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clinic {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Link groups rendered in the footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLinks {
    pub about: &'static str,
    pub quick_links: &'static [&'static str],
    pub service_links: &'static [&'static str],
    pub newsletter: &'static str,
}

/// The canonical clinic record.
pub fn clinic() -> Clinic {
    Clinic {
        name: "RelivaWell",
        tagline: "At RelivaWell, we provide personalized physiotherapy treatments to help \
                  you recover from injuries, manage chronic pain, and improve your overall \
                  mobility and quality of life.",
        address: "123 Wellness Avenue, Mumbai 400001, Maharashtra",
        hours: "Monday - Saturday: 9:00 AM - 7:00 PM | Sunday: Closed",
        latitude: 19.0760,
        longitude: 72.8777,
    }
}

pub fn footer_links() -> FooterLinks {
    FooterLinks {
        about: "RelivaWell Physiotherapy Clinic provides expert care for pain management, \
                injury rehabilitation, and mobility improvement.",
        quick_links: &[
            "Home",
            "About Us",
            "Services",
            "Patient Resources",
            "Contact",
            "Privacy Policy",
            "Terms of Service",
        ],
        service_links: &[
            "Back Pain Treatment",
            "Neck Pain Treatment",
            "Sports Injury Rehabilitation",
            "Post-Surgical Rehabilitation",
            "Joint Pain Management",
            "Posture Correction",
            "Custom Orthotics",
        ],
        newsletter: "Subscribe to our newsletter for health tips, clinic updates, and \
                     special offers.",
    }
}
