use serde::Serialize;

/// Profile for the clinic's lead physiotherapist, shown on the About section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub name: &'static str,
    pub specialty: &'static str,
    pub qualifications: &'static str,
    pub years_experience: u8,
    /// Average review score on a 0.0–5.0 scale.
    pub rating: f64,
    pub review_count: u32,
    pub bio: &'static str,
}

pub fn doctor() -> Doctor {
    Doctor {
        name: "Dr. Rajeev Menon",
        specialty: "Senior Physiotherapist & Pain Management Specialist",
        qualifications: "MPT (Ortho), MIAP, CMP (Canada)",
        years_experience: 15,
        rating: 4.9,
        review_count: 128,
        bio: "Dr. Rajeev Menon is a highly skilled physiotherapist specializing in \
              orthopedic and sports injuries. With over 15 years of clinical experience, \
              he has helped thousands of patients recover from pain and regain their \
              mobility. His patient-centered approach combines evidence-based treatments \
              with personalized care plans tailored to each individual's needs.",
    }
}
