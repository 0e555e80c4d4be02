#[cfg(test)]
mod tests {
    use crate::logic::{average_score, Rating};

    fn rating(score: u8) -> Rating {
        Rating::new(1, "tutor-1", "student-1", score, None).unwrap()
    }

    #[test]
    fn test_score_bounds() {
        assert!(Rating::new(1, "tutor-1", "student-1", 0, None).is_err());
        assert!(Rating::new(1, "tutor-1", "student-1", 6, None).is_err());
        for score in 1..=5 {
            assert!(Rating::new(1, "tutor-1", "student-1", score, None).is_ok());
        }
    }

    #[test]
    fn test_new_rating_defaults() {
        let rating = rating(4);
        assert_eq!(rating.helpful_count, 0);
        assert!(!rating.id.is_empty());
    }

    #[test]
    fn test_blank_comment_is_dropped() {
        let rating = Rating::new(1, "tutor-1", "student-1", 4, Some("  ".to_string())).unwrap();
        assert_eq!(rating.comment, None);
        let rating =
            Rating::new(1, "tutor-1", "student-1", 4, Some("patient".to_string())).unwrap();
        assert_eq!(rating.comment.as_deref(), Some("patient"));
    }

    #[test]
    fn test_average_score_is_exact_mean() {
        assert_eq!(average_score(&[]), None);
        assert_eq!(average_score(&[rating(4)]), Some(4.0));
        assert_eq!(average_score(&[rating(4), rating(5)]), Some(4.5));
        // 4, 4, 5 averages to 13/3, kept exact rather than rounded.
        assert_eq!(
            average_score(&[rating(4), rating(4), rating(5)]),
            Some(13.0 / 3.0)
        );
    }
}
