use serde::Serialize;

/// One card in the patient resources grid.
///
/// The grid mixes four different card shapes, so each variant carries its own
/// payload rather than forcing a common record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Resource {
    /// A single highlighted patient quote.
    Quote {
        text: &'static str,
        author: &'static str,
    },
    /// A short FAQ list.
    Faq {
        title: &'static str,
        items: &'static [&'static str],
    },
    /// Call-to-action that leads to the appointment form.
    Calendar { title: &'static str },
    /// Teaser for a blog post.
    Blog {
        title: &'static str,
        excerpt: &'static str,
        date: &'static str,
        author: &'static str,
    },
}

/// The resources grid, in display order.
pub fn resources() -> Vec<Resource> {
    vec![
        Resource::Quote {
            text: "Dr. Rajeev Menon is truly a great doctor. He has lots of experience \
                   and his approach is very friendly.",
            author: "- Priya Mehta",
        },
        Resource::Faq {
            title: "Frequently Asked Questions",
            items: &[
                "How can I get my prescription?",
                "What should I bring to my appointment?",
                "What should I expect during my first checkup?",
            ],
        },
        Resource::Calendar {
            title: "Schedule an Appointment",
        },
        Resource::Blog {
            title: "Blog",
            excerpt: "Understanding Chronic Pain",
            date: "June 15, 2023",
            author: "By Dr. Menon",
        },
    ]
}
