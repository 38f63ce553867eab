use std::cmp::Ordering;

use super::tables::PreferredOrder;

/// Deterministic display order over category names.
///
/// Preferred categories come first by their table position; the rest follow
/// in case-sensitive lexicographic order.
#[derive(Debug, Clone, Default)]
pub struct CategoryOrderer {
    preferred: PreferredOrder,
}

impl CategoryOrderer {
    pub fn new(preferred: PreferredOrder) -> Self {
        Self { preferred }
    }

    pub fn order<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut ordered: Vec<String> = names.into_iter().map(str::to_string).collect();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered.dedup();
        ordered
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.preferred.rank(a), self.preferred.rank(b)) {
            (Some(ia), Some(ib)) => ia.cmp(&ib).then_with(|| a.cmp(b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_categories_lead_in_table_order() {
        let orderer = CategoryOrderer::new(PreferredOrder::new(["B", "A"]));
        assert_eq!(orderer.order(["z", "A", "B", "a"]), ["B", "A", "a", "z"]);
    }

    #[test]
    fn uppercase_sorts_before_lowercase_among_unknown() {
        let orderer = CategoryOrderer::default();
        assert_eq!(
            orderer.order(["bebidas", "Bebidas", "Açaí"]),
            ["Açaí", "Bebidas", "bebidas"]
        );
    }
}
