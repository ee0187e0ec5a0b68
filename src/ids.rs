use rand::Rng;

const ID_ATTEMPTS: usize = 16;

/// Draws a random 6-digit decimal id, regenerating while `is_taken` reports
/// a collision. Returns `None` once the retry budget is exhausted.
pub fn unique_entity_id<F>(is_taken: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    for _ in 0..ID_ATTEMPTS {
        let candidate = rand::thread_rng().gen_range(100_000..1_000_000).to_string();
        if !is_taken(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Random 9-digit tracking number. Not checked for uniqueness; it is an
/// opaque reference, not a key.
pub fn random_tracking_number() -> String {
    rand::thread_rng()
        .gen_range(100_000_000u64..1_000_000_000)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn entity_id_is_six_decimal_digits() {
        let id = unique_entity_id(|_| false).expect("id");
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(id.chars().next(), Some('0'));
    }

    #[test]
    fn collisions_trigger_a_retry() {
        let draws = Cell::new(0u32);
        let id = unique_entity_id(|_| {
            draws.set(draws.get() + 1);
            draws.get() <= 3
        })
        .expect("id after retries");
        assert_eq!(draws.get(), 4);
        assert_eq!(id.len(), 6);
    }

    #[test]
    fn exhausted_retry_budget_yields_none() {
        assert!(unique_entity_id(|_| true).is_none());
    }

    #[test]
    fn tracking_number_is_nine_decimal_digits() {
        let tracking = random_tracking_number();
        assert_eq!(tracking.len(), 9);
        assert!(tracking.chars().all(|c| c.is_ascii_digit()));
    }
}
