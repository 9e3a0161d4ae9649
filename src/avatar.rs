//! Candidate avatars offered when a person changes profile image

use itertools::Itertools;
use rand::Rng;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Robohash image for a single seed token
pub fn robohash_url(token: &str) -> String {
    format!("https://robohash.org/{}?set=set4", token)
}

/// Draw `count` random alphanumeric tokens and map the distinct ones to avatar URLs.
///
/// Repeated draws collapse, so fewer than `count` URLs may come back.
pub fn candidate_avatars<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .unique()
        .map(|c| robohash_url(&c.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn candidates_are_distinct_robohash_urls() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let urls = candidate_avatars(&mut rng, 5);
            assert!(!urls.is_empty() && urls.len() <= 5);
            assert_eq!(urls.iter().unique().count(), urls.len());
            assert!(urls.iter().all(|u| u.starts_with("https://robohash.org/")
                && u.ends_with("?set=set4")));
        }
    }

    #[test]
    fn zero_count_gives_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(candidate_avatars(&mut rng, 0).is_empty());
    }
}
