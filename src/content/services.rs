use serde::Serialize;

/// A treatment offered by the clinic, one card in the services gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
}

/// The full services gallery, in display order.
pub fn services() -> Vec<Service> {
    [
        "Back Pain Treatment",
        "Joint Pain Treatment",
        "Slipped Disc Treatment",
        "Neck Pain Treatment",
        "Joint Pain Treatment",
        "Headache Treatment",
        "Knee Pain Treatment",
        "Sports Injuries Treatment",
    ]
    .into_iter()
    .map(|title| Service { title })
    .collect()
}
