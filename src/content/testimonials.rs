use serde::Serialize;

/// A patient review shown in the testimonial carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    /// Star rating, 1–5.
    pub rating: u8,
}

/// Carousel entries, in display order.
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Priya Mehta",
            role: "Patient",
            text: "Dr. Rajeev Menon is truly a great doctor. He has lots of experience \
                   and his approach is very friendly.",
            rating: 5,
        },
        Testimonial {
            author: "Rahul Sharma",
            role: "Athlete",
            text: "After my sports injury, Dr. Menon helped me recover faster than \
                   expected. Highly recommended!",
            rating: 5,
        },
        Testimonial {
            author: "Ananya Patel",
            role: "Office Worker",
            text: "My chronic back pain is finally manageable thanks to the treatment \
                   plan from RelivaWell.",
            rating: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_are_one_to_five() {
        for t in testimonials() {
            assert!((1..=5).contains(&t.rating), "{} out of range", t.author);
        }
    }

    #[test]
    fn carousel_has_three_entries() {
        assert_eq!(testimonials().len(), 3);
    }
}
