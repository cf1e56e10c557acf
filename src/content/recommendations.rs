use super::Recommendation;

/// Endorsements shown in the card stack, in their initial order.
pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            "Kamel Hothi OBE",
            "Board Advisor & Keynote Speaker",
            "Committed to empowering inclusive leadership and sustainable growth.",
            "/profile.jpg",
        ),
        Recommendation::new(
            "John Doe",
            "CEO, Example Corp",
            "Kamel is an outstanding leader and visionary. Her dedication and expertise are unmatched.",
            "https://images.unsplash.com/photo-1527980965255-d3b416303d12?w=300&auto=format&fit=crop&crop=faces",
        ),
        Recommendation::new(
            "Jane Smith",
            "COO, Business Ltd.",
            "Her strategic thinking and compassion make her a true asset to any organization.",
            "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=300&auto=format&fit=crop&crop=faces",
        ),
        Recommendation::new(
            "Michael Lee",
            "Director, Global Ventures",
            "Kamel's professionalism and drive inspire everyone around her.",
            "https://images.unsplash.com/photo-1511367461989-f85a21fda167?w=300&auto=format&fit=crop&crop=faces",
        ),
        Recommendation::new(
            "Amelia Rivers",
            "Chief People Officer",
            "She elevates every room she enters and builds bridges across cultures and sectors.",
            "https://images.unsplash.com/photo-1502685104226-ee32379fefbe?w=300&auto=format&fit=crop&crop=faces",
        ),
        Recommendation::new(
            "Raj Patel",
            "SVP, Strategy & Growth",
            "Her board advisory guidance unlocked alignment and velocity across divisions.",
            "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=301&auto=format&fit=crop&crop=faces",
        ),
        Recommendation::new(
            "Elena García",
            "Head of People Transformation",
            "A rare blend of vision, pragmatism and deep human understanding.",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=300&auto=format&fit=crop&crop=faces",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ImageSource;

    #[test]
    fn first_card_uses_local_profile_photo() {
        let recs = recommendations();
        assert_eq!(recs.len(), 7);
        assert!(matches!(recs[0].image, ImageSource::Local(_)));
        assert!(recs[1..]
            .iter()
            .all(|r| matches!(r.image, ImageSource::Remote(_))));
    }
}
