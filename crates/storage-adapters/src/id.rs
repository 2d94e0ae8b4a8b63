//! Identifier suffixes for new rows (`thread-<suffix>`, `comment-<suffix>`).

use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// 16 hex characters taken from a random v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        let mut simple = Uuid::new_v4().simple().to_string();
        simple.truncate(16);
        simple
    }
}

/// Lets tests pin identifiers with a closure such as `|| "123".to_string()`.
impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync,
{
    fn next_id(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_short_and_distinct() {
        let ids = UuidIdGenerator;
        let (a, b) = (ids.next_id(), ids.next_id());
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn closures_are_generators() {
        let fixed = || "123".to_string();
        assert_eq!(fixed.next_id(), "123");
    }
}
