// src/utils/id.rs

use rand::Rng;

const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_SUFFIX_LEN: usize = 7;

/// Generates a record id: a short prefix naming the record kind plus seven
/// random base-36 characters, e.g. `vid_k27dh3q`.
pub fn uid(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let idx = rng.gen_range(0..ID_CHARSET.len());
            ID_CHARSET[idx] as char
        })
        .collect();
    format!("{prefix}_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_has_prefix_and_seven_char_suffix() {
        let id = uid("vid");
        let (prefix, suffix) = id.split_once('_').expect("id should contain an underscore");
        assert_eq!(prefix, "vid");
        assert_eq!(suffix.len(), 7);
        assert!(suffix.bytes().all(|b| ID_CHARSET.contains(&b)));
    }

    #[test]
    fn uid_does_not_repeat_over_a_small_sample() {
        let ids: std::collections::HashSet<String> = (0..100).map(|_| uid("u")).collect();
        assert_eq!(ids.len(), 100);
    }
}
